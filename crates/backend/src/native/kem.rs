//! ML-KEM adapters over `pqcrypto-mlkem`

use pqcheck_api::{AdapterError, Algorithm, KemAdapter, KeyPair, Operation, Result, SharedSecret};
use pqcrypto_traits::kem::{Ciphertext as _, PublicKey as _, SecretKey as _, SharedSecret as _};
use zeroize::Zeroizing;

macro_rules! native_kem {
    ($adapter:ident, $module:ident, $algorithm:expr) => {
        #[doc = concat!("In-process adapter for `pqcrypto_mlkem::", stringify!($module), "`")]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $adapter;

        impl KemAdapter for $adapter {
            fn algorithm(&self) -> Algorithm {
                $algorithm
            }

            fn keypair(&self) -> Result<KeyPair> {
                let (pk, sk) = pqcrypto_mlkem::$module::keypair();
                Ok(KeyPair::new(pk.as_bytes(), sk.as_bytes()))
            }

            fn encapsulate(&self, public_key: &[u8]) -> Result<(Vec<u8>, SharedSecret)> {
                let pk = pqcrypto_mlkem::$module::PublicKey::from_bytes(public_key)
                    .map_err(|e| malformed($algorithm, Operation::Encapsulate, "public key", e))?;
                // pqcrypto hands the secret back first
                let (ss, ct) = pqcrypto_mlkem::$module::encapsulate(&pk);
                Ok((ct.as_bytes().to_vec(), Zeroizing::new(ss.as_bytes().to_vec())))
            }

            fn decapsulate(&self, ciphertext: &[u8], secret_key: &[u8]) -> Result<SharedSecret> {
                let ct = pqcrypto_mlkem::$module::Ciphertext::from_bytes(ciphertext)
                    .map_err(|e| malformed($algorithm, Operation::Decapsulate, "ciphertext", e))?;
                let sk = pqcrypto_mlkem::$module::SecretKey::from_bytes(secret_key)
                    .map_err(|e| malformed($algorithm, Operation::Decapsulate, "secret key", e))?;
                let ss = pqcrypto_mlkem::$module::decapsulate(&ct, &sk);
                Ok(Zeroizing::new(ss.as_bytes().to_vec()))
            }
        }
    };
}

native_kem!(NativeMlKem512, mlkem512, Algorithm::MlKem512);
native_kem!(NativeMlKem768, mlkem768, Algorithm::MlKem768);
native_kem!(NativeMlKem1024, mlkem1024, Algorithm::MlKem1024);

pub(super) fn malformed(
    algorithm: Algorithm,
    operation: Operation,
    what: &str,
    err: pqcrypto_traits::Error,
) -> AdapterError {
    AdapterError::crypto(algorithm, operation, format!("malformed {}: {:?}", what, err))
}
