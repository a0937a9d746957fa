//! The departments of Benin and the communes inside each of them.

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::LazyLock,
};

const DEPARTMENTS: &[(&str, &[&str])] = &[
    (
        "Alibori",
        &["Banikoara", "Gogounou", "Kandi", "Karimama", "Malanville", "Ségbana"],
    ),
    (
        "Atacora",
        &[
            "Boukoumbé",
            "Cobly",
            "Kérou",
            "Kouandé",
            "Matéri",
            "Natitingou",
            "Péhunco",
            "Tanguiéta",
            "Toucountouna",
        ],
    ),
    (
        "Atlantique",
        &[
            "Abomey-Calavi",
            "Allada",
            "Kpomassè",
            "Ouidah",
            "Sô-Ava",
            "Toffo",
            "Tori-Bossito",
            "Zè",
        ],
    ),
    (
        "Borgou",
        &[
            "Bembèrèkè",
            "Kalalé",
            "N'Dali",
            "Nikki",
            "Parakou",
            "Pèrèrè",
            "Sinendé",
            "Tchaourou",
        ],
    ),
    (
        "Collines",
        &["Bantè", "Dassa-Zoumè", "Glazoué", "Ouèssè", "Savalou", "Savè"],
    ),
    (
        "Couffo",
        &["Aplahoué", "Djakotomey", "Dogbo", "Klouékanmè", "Lalo", "Toviklin"],
    ),
    ("Donga", &["Bassila", "Copargo", "Djougou", "Ouaké"]),
    ("Littoral", &["Cotonou"]),
    (
        "Mono",
        &["Athiémé", "Bopa", "Comè", "Grand-Popo", "Houéyogbé", "Lokossa"],
    ),
    (
        "Ouémé",
        &[
            "Adjarra",
            "Adjohoun",
            "Aguégués",
            "Akpro-Missérété",
            "Avrankou",
            "Bonou",
            "Dangbo",
            "Porto-Novo",
            "Sèmè-Kpodji",
        ],
    ),
    (
        "Plateau",
        &["Adja-Ouèrè", "Ifangni", "Kétou", "Pobè", "Sakété"],
    ),
    (
        "Zou",
        &[
            "Abomey",
            "Agbangnizoun",
            "Bohicon",
            "Covè",
            "Djidja",
            "Ouinhi",
            "Za-Kpota",
            "Zagnanado",
            "Zogbodomey",
        ],
    ),
];

pub type RegionTable = BTreeMap<&'static str, BTreeSet<&'static str>>;

pub fn regions() -> &'static RegionTable {
    static REGIONS: LazyLock<RegionTable> = LazyLock::new(|| {
        DEPARTMENTS
            .iter()
            .map(|(department, communes)| (*department, communes.iter().copied().collect()))
            .collect()
    });
    &REGIONS
}

pub fn departments() -> impl Iterator<Item = &'static str> {
    regions().keys().copied()
}

pub fn communes_of(department: &str) -> Option<&'static BTreeSet<&'static str>> {
    regions().get(department.trim())
}

pub fn is_department(department: &str) -> bool {
    communes_of(department).is_some()
}

pub fn commune_in_department(department: &str, commune: &str) -> bool {
    communes_of(department).is_some_and(|communes| communes.contains(commune.trim()))
}
