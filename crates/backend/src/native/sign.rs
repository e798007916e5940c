//! ML-DSA and Falcon adapters over `pqcrypto-mldsa` / `pqcrypto-falcon`

use pqcheck_api::{AdapterError, Algorithm, KeyPair, Operation, Result, SignatureAdapter};
use pqcrypto_traits::sign::{PublicKey as _, SecretKey as _, SignedMessage as _};

use super::kem::malformed;

macro_rules! native_signature {
    ($adapter:ident, $krate:ident :: $module:ident, $algorithm:expr) => {
        #[doc = concat!("In-process adapter for `", stringify!($krate), "::", stringify!($module), "`")]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $adapter;

        impl SignatureAdapter for $adapter {
            fn algorithm(&self) -> Algorithm {
                $algorithm
            }

            fn keypair(&self) -> Result<KeyPair> {
                let (pk, sk) = $krate::$module::keypair();
                Ok(KeyPair::new(pk.as_bytes(), sk.as_bytes()))
            }

            fn sign(&self, message: &[u8], secret_key: &[u8]) -> Result<Vec<u8>> {
                let sk = $krate::$module::SecretKey::from_bytes(secret_key)
                    .map_err(|e| malformed($algorithm, Operation::Sign, "secret key", e))?;
                Ok($krate::$module::sign(message, &sk).as_bytes().to_vec())
            }

            fn verify(&self, signed_message: &[u8], public_key: &[u8]) -> Result<Vec<u8>> {
                let sm = $krate::$module::SignedMessage::from_bytes(signed_message)
                    .map_err(|e| malformed($algorithm, Operation::Verify, "signed message", e))?;
                let pk = $krate::$module::PublicKey::from_bytes(public_key)
                    .map_err(|e| malformed($algorithm, Operation::Verify, "public key", e))?;
                $krate::$module::open(&sm, &pk).map_err(|e| {
                    AdapterError::crypto($algorithm, Operation::Verify, format!("{:?}", e))
                })
            }
        }
    };
}

native_signature!(NativeMlDsa44, pqcrypto_mldsa::mldsa44, Algorithm::MlDsa44);
native_signature!(NativeMlDsa65, pqcrypto_mldsa::mldsa65, Algorithm::MlDsa65);
native_signature!(NativeMlDsa87, pqcrypto_mldsa::mldsa87, Algorithm::MlDsa87);
native_signature!(NativeFalcon512, pqcrypto_falcon::falcon512, Algorithm::Falcon512);
native_signature!(NativeFalcon1024, pqcrypto_falcon::falcon1024, Algorithm::Falcon1024);
