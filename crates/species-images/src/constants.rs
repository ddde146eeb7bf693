//! Compile-time run parameters shared by both harvesters

/// Species labels processed on every run, in order.
///
/// Labels may carry a parenthetical synonym clause.
pub const SPECIES_NAMES: [&str; 15] = [
    "Psilocybe semilanceata",
    "Psilocybe cyanescens",
    "Panaeolus cinctulus",
    "Amanita pantherina",
    "Amanita muscaria",
    "Psilocybe strictipes",
    "Panaeolina foenisecii",
    "Panaeolus papilionaceus",
    "Panaeolus semiovatus",
    "Panaeolus acuminatus",
    "Panaeolus subfirmus",
    "Amanita excelsa (syn. Amanita spissa)",
    "Amanita rubescens",
    "Amanita caesarea",
    "Amanita regalis",
];

/// Per-request timeout for API and image requests
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

pub const GBIF_OUTPUT_ROOT: &str = "gbif_images";
pub const GBIF_IMAGES_PER_SPECIES: usize = 25;
/// GBIF rejects occurrence pages larger than this
pub const GBIF_OCCURRENCE_PAGE_SIZE: u32 = 300;

pub const SVAMPEATLAS_OUTPUT_ROOT: &str = "species_images";
