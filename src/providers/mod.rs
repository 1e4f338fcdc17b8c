pub mod aws;
pub mod inventory;
pub mod kms;
pub mod types;

pub use aws::AwsInventory;
pub use inventory::CloudInventory;
pub use kms::{CredentialDecryptor, KmsDecryptor};
pub use types::*;
