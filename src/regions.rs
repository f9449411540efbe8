use ahash::AHashMap;
use lazy_static::lazy_static;

/// Issuing regions keyed by the two-digit code at positions 7-8: codes
/// 01-39 for the counties, 40 for Bucharest and 41-46 for its sectors,
/// 51 and 52 assigned when Călărași and Giurgiu became counties, and
/// the two decommissioned sector codes 47 and 48, which still appear in
/// old numbers.
const REGION_ENTRIES: [(&str, &str); 50] = [
    ("01", "Alba"),
    ("02", "Arad"),
    ("03", "Argeș"),
    ("04", "Bacău"),
    ("05", "Bihor"),
    ("06", "Bistrița-Năsăud"),
    ("07", "Botoșani"),
    ("08", "Brașov"),
    ("09", "Brăila"),
    ("10", "Buzău"),
    ("11", "Caraș-Severin"),
    ("12", "Cluj"),
    ("13", "Constanța"),
    ("14", "Covasna"),
    ("15", "Dambovița"),
    ("16", "Dolj"),
    ("17", "Galați"),
    ("18", "Gorj"),
    ("19", "Harghita"),
    ("20", "Hunedoara"),
    ("21", "Ialomița"),
    ("22", "Iași"),
    ("23", "Ilfov"),
    ("24", "Maramureș"),
    ("25", "Mehedinți"),
    ("26", "Mureș"),
    ("27", "Neamț"),
    ("28", "Olt"),
    ("29", "Prahova"),
    ("30", "Satu Mare"),
    ("31", "Sălaj"),
    ("32", "Sibiu"),
    ("33", "Suceava"),
    ("34", "Teleorman"),
    ("35", "Timiș"),
    ("36", "Tulcea"),
    ("37", "Vaslui"),
    ("38", "Vâlcea"),
    ("39", "Vrancea"),
    ("40", "București"),
    ("41", "București - Sector 1"),
    ("42", "București - Sector 2"),
    ("43", "București - Sector 3"),
    ("44", "București - Sector 4"),
    ("45", "București - Sector 5"),
    ("46", "București - Sector 6"),
    ("51", "Calarași"),
    ("52", "Giurgiu"),
    ("47", "București - Sector 7(desfiintat)"),
    ("48", "București - Sector 8(desfiintat)"),
];

lazy_static! {
    static ref REGION_TABLE: AHashMap<&'static str, &'static str> =
        REGION_ENTRIES.iter().copied().collect();
}

/// Region name for a two-digit CNP region code, if the code was ever
/// issued.
pub fn region_name(code: &str) -> Option<&'static str> {
    REGION_TABLE.get(code).copied()
}
