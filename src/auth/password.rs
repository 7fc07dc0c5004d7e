use argon2::{
    Argon2,
    password_hash::{Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

pub fn hash_password(password: &str) -> Result<String, Error> {
    let argon2 = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);

    Ok(argon2.hash_password(password.as_bytes(), &salt)?.to_string())
}

pub fn verify_password(password: &str, hashed: &str) -> Result<(), Error> {
    let argon2 = Argon2::default();
    let parsed = PasswordHash::new(hashed)?;

    argon2.verify_password(password.as_bytes(), &parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hashed = hash_password("admin123").unwrap();

        assert!(verify_password("admin123", &hashed).is_ok());
    }

    #[test]
    fn test_wrong_password_fails() {
        let hashed = hash_password("admin123").unwrap();

        assert!(verify_password("letmein", &hashed).is_err());
    }

    #[test]
    fn test_salted_hashes_differ() {
        let a = hash_password("admin123").unwrap();
        let b = hash_password("admin123").unwrap();

        assert_ne!(a, b);
    }
}
