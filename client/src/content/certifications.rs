//! Certificate records shown in the certifications gallery.

use crate::state::certifications::{Certification, CertificationCategory};

pub static CERTIFICATIONS: &[Certification] = &[
    Certification {
        id: 1,
        title: "ISO 9001:2015",
        image: "/images/certificates/iso-9001.jpg",
        description: "Sistem manajemen mutu untuk jasa pelaksana konstruksi bangunan gedung dan sipil.",
        category: CertificationCategory::Iso,
    },
    Certification {
        id: 2,
        title: "ISO 14001:2015",
        image: "/images/certificates/iso-14001.jpg",
        description: "Sistem manajemen lingkungan yang mencakup pengelolaan limbah dan dampak proyek.",
        category: CertificationCategory::Iso,
    },
    Certification {
        id: 3,
        title: "ISO 45001:2018",
        image: "/images/certificates/iso-45001.jpg",
        description: "Sistem manajemen keselamatan dan kesehatan kerja di seluruh lokasi proyek.",
        category: CertificationCategory::Iso,
    },
    Certification {
        id: 4,
        title: "Sertifikat Badan Usaha (SBU)",
        image: "/images/certificates/sbu.jpg",
        description: "Kualifikasi badan usaha jasa konstruksi untuk subklasifikasi gedung dan sipil.",
        category: CertificationCategory::Legal,
    },
    Certification {
        id: 5,
        title: "Nomor Induk Berusaha (NIB)",
        image: "/images/certificates/nib.jpg",
        description: "Identitas pelaku usaha yang terdaftar melalui sistem perizinan berusaha terintegrasi.",
        category: CertificationCategory::Legal,
    },
    Certification {
        id: 6,
        title: "Sertifikat SMK3",
        image: "/images/certificates/smk3.jpg",
        description: "Penilaian penerapan sistem manajemen K3 dengan predikat memuaskan.",
        category: CertificationCategory::Legal,
    },
    Certification {
        id: 7,
        title: "Anggota GAPENSI",
        image: "/images/certificates/gapensi.jpg",
        description: "Keanggotaan Gabungan Pelaksana Konstruksi Nasional Indonesia.",
        category: CertificationCategory::Membership,
    },
    Certification {
        id: 8,
        title: "Anggota AKI",
        image: "/images/certificates/aki.jpg",
        description: "Keanggotaan Asosiasi Kontraktor Indonesia.",
        category: CertificationCategory::Membership,
    },
];
