pub mod scrypt_codec;

pub use scrypt_codec::ScryptCredentialCodec;
