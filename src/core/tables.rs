//! Static lookup tables: area codes, CPF fiscal regions and plate letters.
//!
//! All tables are compile-time constants, sorted where searched.

/// Fallback when an area code is not in [`AREA_CODES`].
pub const UNKNOWN_AREA_CODE: &str = "DDD não identificado";

/// Fallback when a plate letter has no known state.
pub const UNKNOWN_PLATE_STATE: &str = "Não identificado";

/// Region served by a two-digit area code (DDD).
pub fn area_code_region(ddd: &str) -> Option<&'static str> {
    AREA_CODES
        .binary_search_by_key(&ddd, |&(code, _)| code)
        .ok()
        .map(|i| AREA_CODES[i].1)
}

/// Fiscal region that issued a CPF, keyed by its 9th digit.
///
/// This reflects the numbering scheme used by Receita Federal since the
/// 1970s; it says nothing about where the holder lives today.
pub fn cpf_fiscal_region(ninth_digit: u8) -> Option<&'static str> {
    CPF_REGIONS.get(usize::from(ninth_digit)).copied()
}

/// Probable issuing state for a plate, keyed by its first letter.
///
/// Coarse by nature: several states share letter ranges and ranges were
/// reassigned over time.
pub fn plate_state(first_letter: char) -> Option<&'static str> {
    let c = first_letter.to_ascii_uppercase();
    if !c.is_ascii_uppercase() {
        return None;
    }
    PLATE_STATES.get(usize::from(c as u8 - b'A')).copied()
}

/// Indexed by the CPF's 9th digit.
static CPF_REGIONS: [&str; 10] = [
    "RS",
    "DF/GO/MS/MT/TO",
    "AC/AM/AP/PA/RO/RR",
    "CE/MA/PI",
    "AL/PB/PE/RN",
    "BA/SE",
    "MG",
    "ES/RJ",
    "SP",
    "PR/SC",
];

/// Indexed by `letter - 'A'`.
static PLATE_STATES: [&str; 26] = [
    "PR", "PR", "PR", "PR", "PR", // A-E
    "MG", "MG", "MG", // F-H
    "SP", "SP", "SP", "SP", "SP", "SP", "SP", "SP", "SP", // I-Q
    "RJ", // R
    "RS", "RS", "RS", // S-U
    "CE", "PE", "BA", "GO", "PA", // V-Z
];

/// Area codes (DDD) in use. Sorted for binary search.
static AREA_CODES: &[(&str, &str)] = &[
    ("11", "São Paulo - Capital"),
    ("12", "São Paulo - Vale do Paraíba"),
    ("13", "São Paulo - Baixada Santista"),
    ("14", "São Paulo - Bauru"),
    ("15", "São Paulo - Sorocaba"),
    ("16", "São Paulo - Ribeirão Preto"),
    ("17", "São Paulo - São José do Rio Preto"),
    ("18", "São Paulo - Presidente Prudente"),
    ("19", "São Paulo - Campinas"),
    ("21", "Rio de Janeiro - Capital"),
    ("22", "Rio de Janeiro - Interior"),
    ("24", "Rio de Janeiro - Interior"),
    ("27", "Espírito Santo - Capital"),
    ("28", "Espírito Santo - Interior"),
    ("31", "Minas Gerais - Belo Horizonte"),
    ("32", "Minas Gerais - Juiz de Fora"),
    ("33", "Minas Gerais - Governador Valadares"),
    ("34", "Minas Gerais - Uberlândia"),
    ("35", "Minas Gerais - Poços de Caldas"),
    ("37", "Minas Gerais - Divinópolis"),
    ("38", "Minas Gerais - Montes Claros"),
    ("41", "Paraná - Curitiba"),
    ("42", "Paraná - Ponta Grossa"),
    ("43", "Paraná - Londrina"),
    ("44", "Paraná - Maringá"),
    ("45", "Paraná - Foz do Iguaçu"),
    ("46", "Paraná - Francisco Beltrão"),
    ("47", "Santa Catarina - Joinville"),
    ("48", "Santa Catarina - Florianópolis"),
    ("49", "Santa Catarina - Chapecó"),
    ("51", "Rio Grande do Sul - Porto Alegre"),
    ("53", "Rio Grande do Sul - Pelotas"),
    ("54", "Rio Grande do Sul - Caxias do Sul"),
    ("55", "Rio Grande do Sul - Santa Maria"),
    ("61", "Distrito Federal - Brasília"),
    ("62", "Goiás - Goiânia"),
    ("63", "Tocantins"),
    ("64", "Goiás - Rio Verde"),
    ("65", "Mato Grosso - Cuiabá"),
    ("66", "Mato Grosso - Rondonópolis"),
    ("67", "Mato Grosso do Sul"),
    ("68", "Acre"),
    ("69", "Rondônia"),
    ("71", "Bahia - Salvador"),
    ("73", "Bahia - Itabuna"),
    ("74", "Bahia - Juazeiro"),
    ("75", "Bahia - Feira de Santana"),
    ("77", "Bahia - Vitória da Conquista"),
    ("79", "Sergipe"),
    ("81", "Pernambuco - Recife"),
    ("82", "Alagoas"),
    ("83", "Paraíba"),
    ("84", "Rio Grande do Norte"),
    ("85", "Ceará - Fortaleza"),
    ("86", "Piauí - Teresina"),
    ("87", "Pernambuco - Interior"),
    ("88", "Ceará - Interior"),
    ("89", "Piauí - Interior"),
    ("91", "Pará - Belém"),
    ("92", "Amazonas - Manaus"),
    ("93", "Pará - Santarém"),
    ("94", "Pará - Marabá"),
    ("95", "Roraima"),
    ("96", "Amapá"),
    ("97", "Amazonas - Interior"),
    ("98", "Maranhão - São Luís"),
    ("99", "Maranhão - Interior"),
];
