pub type TypeCode = u8;
pub type LineNumber = usize;
pub type FileUploadId = u64;
pub type StoreId = u64;
