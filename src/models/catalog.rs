use crate::models::errors::CatalogError;
use crate::types::TypeCode;

/// Whether a transaction type moves value into or out of the merchant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nature {
    Income,
    Expense,
}

impl Nature {
    pub const fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }
}

/// Describes one CNAB transaction type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub code: TypeCode,
    pub name: &'static str,
    pub nature: Nature,
}

impl TypeDescriptor {
    const fn new(code: TypeCode, name: &'static str, nature: Nature) -> Self {
        Self { code, name, nature }
    }

    pub const fn sign(&self) -> char {
        self.nature.sign()
    }
}

const TRAILER_CODE: TypeCode = 9;

const BASE_ENTRIES: [TypeDescriptor; 8] = [
    TypeDescriptor::new(1, "Debit", Nature::Income),
    TypeDescriptor::new(2, "Boleto", Nature::Expense),
    TypeDescriptor::new(3, "Financing", Nature::Expense),
    TypeDescriptor::new(4, "Credit", Nature::Income),
    TypeDescriptor::new(5, "Loan receipt", Nature::Income),
    TypeDescriptor::new(6, "Sales", Nature::Income),
    TypeDescriptor::new(7, "TED receipt", Nature::Income),
    TypeDescriptor::new(8, "DOC receipt", Nature::Income),
];

/// Immutable lookup table from type code to descriptor.
///
/// Constructed once at process start and injected into both the decoder and
/// the storage aggregation, so the two can never drift apart. The catalog is
/// read-only after construction and therefore safe to share across threads
/// without synchronization.
///
/// Code 9 doubles as the trailer marker. Whether it also resolves as a real
/// "Rent" expense type is an explicit construction choice:
/// [`TypeCatalog::standard`] leaves it unknown, [`TypeCatalog::with_rent_trailer`]
/// maps it. The batch parser skips type-9 records unconditionally either way,
/// so the choice only affects direct catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCatalog {
    entries: [Option<TypeDescriptor>; 10],
}

impl TypeCatalog {
    /// Codes 1-8 populated; 9 is trailer-only and fails lookups.
    pub fn standard() -> Self {
        let mut entries = [None; 10];
        for descriptor in BASE_ENTRIES {
            entries[descriptor.code as usize] = Some(descriptor);
        }
        Self { entries }
    }

    /// Like [`standard`][Self::standard], but code 9 also resolves to a
    /// "Rent" expense entry.
    pub fn with_rent_trailer() -> Self {
        let mut catalog = Self::standard();
        catalog.entries[TRAILER_CODE as usize] =
            Some(TypeDescriptor::new(TRAILER_CODE, "Rent", Nature::Expense));
        catalog
    }

    pub fn descriptor(&self, code: TypeCode) -> Result<&TypeDescriptor, CatalogError> {
        self.entries
            .get(code as usize)
            .and_then(Option::as_ref)
            .ok_or(CatalogError::UnknownTypeCode { code })
    }

    pub fn name_of(&self, code: TypeCode) -> Result<&'static str, CatalogError> {
        self.descriptor(code).map(|descriptor| descriptor.name)
    }

    pub fn nature_of(&self, code: TypeCode) -> Result<Nature, CatalogError> {
        self.descriptor(code).map(|descriptor| descriptor.nature)
    }

    pub fn sign_of(&self, code: TypeCode) -> Result<char, CatalogError> {
        self.descriptor(code).map(TypeDescriptor::sign)
    }

    pub fn contains(&self, code: TypeCode) -> bool {
        self.descriptor(code).is_ok()
    }
}

impl Default for TypeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
