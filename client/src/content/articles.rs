//! Article listing metadata.

use crate::state::articles::{ArticleCategory, ArticleSummary};

pub static ARTICLES: &[ArticleSummary] = &[
    ArticleSummary {
        id: 1,
        title: "Pembangunan Gedung Perkantoran 12 Lantai di Jakarta Selatan",
        excerpt: "Catatan lapangan dari proyek gedung perkantoran dengan struktur beton bertulang dan fasad kaca hemat energi.",
        category: ArticleCategory::Proyek,
        image: "/images/articles/gedung-perkantoran.jpg",
        date: "12 Maret 2024",
        read_time: "6 menit",
        slug: "gedung-perkantoran-jakarta-selatan",
    },
    ArticleSummary {
        id: 2,
        title: "Memahami Persetujuan Bangunan Gedung (PBG)",
        excerpt: "PBG menggantikan IMB. Berikut tahapan pengajuan, dokumen teknis yang diperlukan, dan estimasi waktunya.",
        category: ArticleCategory::Regulasi,
        image: "/images/articles/pbg.jpg",
        date: "28 Februari 2024",
        read_time: "5 menit",
        slug: "memahami-pbg",
    },
    ArticleSummary {
        id: 3,
        title: "Layanan Design and Build untuk Fasilitas Industri",
        excerpt: "Satu kontrak untuk desain dan konstruksi mempercepat jadwal dan memperjelas tanggung jawab.",
        category: ArticleCategory::Layanan,
        image: "/images/articles/design-build.jpg",
        date: "5 Februari 2024",
        read_time: "4 menit",
        slug: "design-and-build-industri",
    },
    ArticleSummary {
        id: 4,
        title: "Sertifikat Laik Fungsi: Kapan dan Mengapa Diperlukan",
        excerpt: "SLF wajib sebelum bangunan dimanfaatkan. Kami uraikan pemeriksaan kelaikan yang dilakukan tim teknis.",
        category: ArticleCategory::Regulasi,
        image: "/images/articles/slf.jpg",
        date: "18 Januari 2024",
        read_time: "5 menit",
        slug: "sertifikat-laik-fungsi",
    },
    ArticleSummary {
        id: 5,
        title: "Building Information Modeling di Proyek Jembatan",
        excerpt: "Penerapan BIM untuk deteksi clash, estimasi volume, dan koordinasi antar disiplin pada proyek sipil.",
        category: ArticleCategory::Teknologi,
        image: "/images/articles/bim-jembatan.jpg",
        date: "9 Januari 2024",
        read_time: "7 menit",
        slug: "bim-proyek-jembatan",
    },
    ArticleSummary {
        id: 6,
        title: "Mengendalikan Biaya Proyek dengan Earned Value",
        excerpt: "Metode earned value membantu manajer proyek membaca deviasi biaya dan jadwal sejak dini.",
        category: ArticleCategory::Manajemen,
        image: "/images/articles/earned-value.jpg",
        date: "14 Desember 2023",
        read_time: "6 menit",
        slug: "earned-value-biaya-proyek",
    },
    ArticleSummary {
        id: 7,
        title: "Standar K3 Konstruksi Terbaru dan Dampaknya di Lapangan",
        excerpt: "Pembaruan Sistem Manajemen Keselamatan Konstruksi (SMKK) dan cara kami menerapkannya di setiap proyek.",
        category: ArticleCategory::Regulasi,
        image: "/images/articles/smkk.jpg",
        date: "30 November 2023",
        read_time: "6 menit",
        slug: "standar-k3-konstruksi",
    },
    ArticleSummary {
        id: 8,
        title: "Renovasi Pabrik Tanpa Menghentikan Produksi",
        excerpt: "Strategi fase kerja dan isolasi area yang memungkinkan pabrik tetap beroperasi selama renovasi.",
        category: ArticleCategory::Proyek,
        image: "/images/articles/renovasi-pabrik.jpg",
        date: "2 November 2023",
        read_time: "5 menit",
        slug: "renovasi-pabrik-tanpa-henti",
    },
    ArticleSummary {
        id: 9,
        title: "Beton Pracetak: Kecepatan dan Konsistensi Mutu",
        excerpt: "Elemen pracetak mempercepat pekerjaan struktur dan menekan variasi mutu dibanding pengecoran di tempat.",
        category: ArticleCategory::Teknologi,
        image: "/images/articles/beton-pracetak.jpg",
        date: "20 Oktober 2023",
        read_time: "4 menit",
        slug: "beton-pracetak",
    },
    ArticleSummary {
        id: 10,
        title: "Konsultasi Awal: Apa yang Perlu Disiapkan Pemilik Proyek",
        excerpt: "Data lahan, kebutuhan ruang, dan anggaran indikatif membuat sesi konsultasi jauh lebih produktif.",
        category: ArticleCategory::Layanan,
        image: "/images/articles/konsultasi-awal.jpg",
        date: "20 Oktober 2023",
        read_time: "3 menit",
        slug: "persiapan-konsultasi-awal",
    },
];
