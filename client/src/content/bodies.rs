//! Article bodies keyed by slug.

use crate::state::article_detail::ContentBlock::{self, Image, List, Paragraph, Quote, Subheading};

pub static BODIES: &[(&str, &[ContentBlock])] = &[
    (
        "gedung-perkantoran-jakarta-selatan",
        &[
            Paragraph {
                text: "Proyek ini mencakup pembangunan gedung perkantoran 12 lantai dengan dua basement parkir di atas lahan 3.200 m².",
            },
            Subheading { text: "Struktur dan fasad" },
            Paragraph {
                text: "Struktur utama menggunakan beton bertulang dengan sistem flat slab untuk mempercepat siklus pengecoran per lantai.",
            },
            Image {
                url: "/images/articles/gedung-perkantoran-fasad.jpg",
                caption: Some("Pemasangan curtain wall pada lantai 8"),
            },
            List {
                items: &[
                    "Siklus pengecoran 7 hari per lantai",
                    "Kaca low-e untuk menekan beban pendinginan",
                    "Zero accident selama 480.000 jam kerja",
                ],
            },
        ],
    ),
    (
        "memahami-pbg",
        &[
            Paragraph {
                text: "Persetujuan Bangunan Gedung (PBG) adalah izin yang diberikan untuk membangun baru, mengubah, memperluas, atau merawat bangunan gedung.",
            },
            Subheading { text: "Dokumen yang perlu disiapkan" },
            List {
                items: &[
                    "Data pemohon dan bukti kepemilikan lahan",
                    "Gambar arsitektur, struktur, dan MEP",
                    "Perhitungan struktur untuk bangunan lebih dari dua lantai",
                ],
            },
            Quote {
                text: "Dokumen teknis yang lengkap sejak awal memangkas waktu verifikasi secara signifikan.",
                author: Some("Tim Perizinan"),
            },
        ],
    ),
    (
        "design-and-build-industri",
        &[
            Paragraph {
                text: "Dalam skema design and build, satu penyedia jasa bertanggung jawab atas perancangan sekaligus pelaksanaan konstruksi.",
            },
            Subheading { text: "Keuntungan bagi pemilik fasilitas" },
            List {
                items: &[
                    "Satu titik tanggung jawab",
                    "Pekerjaan desain dan konstruksi dapat berjalan paralel",
                    "Perubahan desain lebih cepat dievaluasi biayanya",
                ],
            },
            Image { url: "/images/articles/design-build-gudang.jpg", caption: None },
        ],
    ),
    (
        "sertifikat-laik-fungsi",
        &[
            Paragraph {
                text: "Sertifikat Laik Fungsi (SLF) diterbitkan setelah bangunan dinyatakan memenuhi persyaratan keselamatan, kesehatan, kenyamanan, dan kemudahan.",
            },
            Subheading { text: "Pemeriksaan kelaikan" },
            Paragraph {
                text: "Tim pengkaji teknis memeriksa kesesuaian as-built drawing dengan PBG serta fungsi sistem proteksi kebakaran.",
            },
            Quote {
                text: "SLF bukan formalitas; ia adalah bukti bahwa bangunan aman digunakan.",
                author: None,
            },
        ],
    ),
    (
        "bim-proyek-jembatan",
        &[
            Paragraph {
                text: "Building Information Modeling memungkinkan seluruh disiplin bekerja pada model tiga dimensi yang sama.",
            },
            Image {
                url: "/images/articles/bim-model.jpg",
                caption: Some("Model federasi struktur dan utilitas jembatan"),
            },
            Subheading { text: "Deteksi clash" },
            Paragraph {
                text: "Lebih dari 300 konflik antara tulangan dan saluran utilitas ditemukan sebelum pekerjaan lapangan dimulai.",
            },
        ],
    ),
    (
        "earned-value-biaya-proyek",
        &[
            Paragraph {
                text: "Earned value membandingkan nilai pekerjaan yang telah diselesaikan dengan rencana dan biaya aktual.",
            },
            List {
                items: &[
                    "CPI di bawah 1 menandakan pembengkakan biaya",
                    "SPI di bawah 1 menandakan keterlambatan",
                    "Tren mingguan lebih berguna dari satu angka",
                ],
            },
            Quote {
                text: "Yang tidak diukur tidak dapat dikendalikan.",
                author: Some("Manajer Proyek Senior"),
            },
        ],
    ),
    (
        "standar-k3-konstruksi",
        &[
            Paragraph {
                text: "Sistem Manajemen Keselamatan Konstruksi (SMKK) mewajibkan setiap penyedia jasa menyusun rencana keselamatan konstruksi.",
            },
            Subheading { text: "Penerapan di lapangan" },
            List {
                items: &[
                    "Safety induction untuk setiap pekerja baru",
                    "Inspeksi perancah harian",
                    "Izin kerja untuk pekerjaan di ketinggian",
                ],
            },
            Image {
                url: "/images/articles/smkk-briefing.jpg",
                caption: Some("Safety briefing pagi di lokasi proyek"),
            },
        ],
    ),
    (
        "renovasi-pabrik-tanpa-henti",
        &[
            Paragraph {
                text: "Renovasi dibagi menjadi empat fase sehingga setiap lini produksi hanya terdampak pada satu jendela kerja.",
            },
            Subheading { text: "Isolasi area kerja" },
            Paragraph {
                text: "Partisi sementara bertekanan negatif mencegah debu konstruksi masuk ke area produksi.",
            },
        ],
    ),
    (
        "beton-pracetak",
        &[
            Paragraph {
                text: "Elemen pracetak diproduksi di pabrik dengan kontrol mutu yang ketat lalu dirakit di lokasi.",
            },
            List {
                items: &["Mutu beton konsisten", "Waktu ereksi lebih singkat", "Limbah lapangan lebih sedikit"],
            },
            Image {
                url: "/images/articles/pracetak-ereksi.jpg",
                caption: Some("Ereksi balok pracetak menggunakan crawler crane"),
            },
        ],
    ),
    (
        "persiapan-konsultasi-awal",
        &[
            Paragraph {
                text: "Sesi konsultasi awal paling produktif ketika pemilik proyek membawa data dasar yang memadai.",
            },
            List {
                items: &[
                    "Lokasi dan luas lahan",
                    "Kebutuhan ruang dan fungsi bangunan",
                    "Target jadwal dan anggaran indikatif",
                ],
            },
            Quote {
                text: "Pertanyaan yang tepat di awal menghemat banyak revisi di kemudian hari.",
                author: None,
            },
        ],
    ),
];
