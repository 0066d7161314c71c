/// One model input as it appears on the form and in the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WineFeature {
    /// Form field `name` and JSON key.
    pub name: &'static str,
    pub label: &'static str,
}

/// The 13 chemical properties of the UCI Wine dataset, in column order.
///
/// The position of each entry is the feature index used by the model file.
pub const WINE_FEATURES: [WineFeature; 13] = [
    WineFeature { name: "alcohol", label: "Alcohol" },
    WineFeature { name: "malic_acid", label: "Malic Acid" },
    WineFeature { name: "ash", label: "Ash" },
    WineFeature { name: "alcalinity_of_ash", label: "Alcalinity of Ash" },
    WineFeature { name: "magnesium", label: "Magnesium" },
    WineFeature { name: "total_phenols", label: "Total Phenols" },
    WineFeature { name: "flavanoids", label: "Flavanoids" },
    WineFeature { name: "nonflavanoid_phenols", label: "Nonflavanoid Phenols" },
    WineFeature { name: "proanthocyanins", label: "Proanthocyanins" },
    WineFeature { name: "color_intensity", label: "Color Intensity" },
    WineFeature { name: "hue", label: "Hue" },
    WineFeature { name: "od280", label: "OD280/OD315" },
    WineFeature { name: "proline", label: "Proline" },
];

/// Display name for a cultivar class id.
pub fn cultivar_name(class_id: u32) -> String {
    match class_id {
        1 => "Cultivar 1 (e.g. Barolo)".to_string(),
        2 => "Cultivar 2 (e.g. Grignolino)".to_string(),
        3 => "Cultivar 3 (e.g. Barbera)".to_string(),
        other => format!("Cultivar {other}"),
    }
}
