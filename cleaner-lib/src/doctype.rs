//! Document types, their static cleaning configuration, and filename-based
//! dispatch.

use std::path::Path;

/// 0-based index of the BVN column: the 9th sheet column, for every
/// document type. The submission layouts all carry the BVN there today;
/// per-type schemas are deliberately not consulted.
pub const BVN_COLUMN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    IndividualBorrower,
    CreditInformation,
    CorporateBorrower,
    PrincipalOfficers,
    GuarantorsInformation,
}

/// Per-type cleaning rules. Column positions are spreadsheet letters,
/// resolved through [`column_index`].
#[derive(Debug)]
pub struct TypeConfig {
    /// Columns that must be non-blank in every data row.
    pub blank_check_columns: &'static [&'static str],
    /// Columns normalized to the canonical date form.
    pub date_columns: &'static [&'static str],
    /// Columns mapped to gender submission codes; empty when the layout
    /// has no gender column.
    pub gender_columns: &'static [&'static str],
    /// Whether a pipe-delimited export is produced after persistence.
    pub exports_delimited: bool,
}

const ALL_COLUMNS_A_TO_V: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V",
];

static INDIVIDUAL_BORROWER: TypeConfig = TypeConfig {
    blank_check_columns: &["A", "C", "D", "F", "I"],
    date_columns: &["F"],
    gender_columns: &["K"],
    exports_delimited: true,
};

static CREDIT_INFORMATION: TypeConfig = TypeConfig {
    blank_check_columns: &["A", "B", "C", "D", "E", "H", "J", "M", "S"],
    date_columns: &["D", "E", "P", "R", "U"],
    gender_columns: &[],
    exports_delimited: true,
};

static CORPORATE_BORROWER: TypeConfig = TypeConfig {
    blank_check_columns: &["B", "F"],
    date_columns: &["E"],
    gender_columns: &[],
    exports_delimited: false,
};

static PRINCIPAL_OFFICERS: TypeConfig = TypeConfig {
    blank_check_columns: ALL_COLUMNS_A_TO_V,
    date_columns: &["E", "V"],
    gender_columns: &["F", "W"],
    exports_delimited: true,
};

static GUARANTORS_INFORMATION: TypeConfig = TypeConfig {
    blank_check_columns: ALL_COLUMNS_A_TO_V,
    date_columns: &["I"],
    gender_columns: &["J"],
    exports_delimited: true,
};

impl DocumentType {
    /// All types, in the order the intake handler checks their markers.
    pub const ALL: [DocumentType; 5] = [
        DocumentType::IndividualBorrower,
        DocumentType::CreditInformation,
        DocumentType::CorporateBorrower,
        DocumentType::PrincipalOfficers,
        DocumentType::GuarantorsInformation,
    ];

    /// The filename substring that selects this type.
    pub fn marker(self) -> &'static str {
        match self {
            DocumentType::IndividualBorrower => "Individual-Borrower",
            DocumentType::CreditInformation => "Credit-Information",
            DocumentType::CorporateBorrower => "Corporate-Borrower",
            DocumentType::PrincipalOfficers => "Principal-Officers",
            DocumentType::GuarantorsInformation => "Guarantors-Information",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentType::IndividualBorrower => "Individual Borrower",
            DocumentType::CreditInformation => "Credit Information",
            DocumentType::CorporateBorrower => "Corporate Borrower",
            DocumentType::PrincipalOfficers => "Principal Officers",
            DocumentType::GuarantorsInformation => "Guarantors Information",
        }
    }

    /// Sheet-cleaning rules for this type.
    pub fn config(self) -> &'static TypeConfig {
        match self {
            DocumentType::IndividualBorrower => &INDIVIDUAL_BORROWER,
            DocumentType::CreditInformation => &CREDIT_INFORMATION,
            DocumentType::CorporateBorrower => &CORPORATE_BORROWER,
            DocumentType::PrincipalOfficers => &PRINCIPAL_OFFICERS,
            DocumentType::GuarantorsInformation => &GUARANTORS_INFORMATION,
        }
    }

    /// Dispatch by filename marker. Exactly one marker is expected; the
    /// first match in intake order wins.
    pub fn from_filename(filename: &str) -> Option<DocumentType> {
        DocumentType::ALL
            .iter()
            .copied()
            .find(|doc_type| filename.contains(doc_type.marker()))
    }
}

/// Resolve a column letter (`"A"`, `"W"`, `"AA"`) to a 0-based index.
pub fn column_index(letters: &str) -> usize {
    letters
        .bytes()
        .fold(0usize, |acc, b| {
            acc * 26 + (b.to_ascii_uppercase() - b'A' + 1) as usize
        })
        .saturating_sub(1)
}

/// Resolve a letter list to 0-based indices, preserving order.
pub fn column_indices(letters: &[&str]) -> Vec<usize> {
    letters.iter().map(|l| column_index(l)).collect()
}

/// Accepted upload extension: `.xlsx`, case-insensitive.
pub fn has_accepted_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"))
}
