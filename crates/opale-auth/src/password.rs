//! Password hashing for the admin credential.
//!
//! Iterated key derivation with a random salt; the stored form is
//! `$pbkdf2$<iterations>$<salt-hex>$<hash-hex>` so the iteration count can
//! be raised without invalidating existing hashes.

use crate::AuthError;

/// Password hasher configuration.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    /// Number of iterations for key derivation.
    pub iterations: u32,
    /// Salt length in bytes.
    pub salt_length: usize,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            iterations: 10000,
            salt_length: 16,
        }
    }
}

impl PasswordHasher {
    /// Create a new hasher with custom iterations.
    pub fn new(iterations: u32) -> Self {
        Self {
            iterations,
            salt_length: 16,
        }
    }

    /// Hash a password.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = self.generate_salt();
        let hash = self.derive_key(password, &salt);

        Ok(format!(
            "$pbkdf2${}${}${}",
            self.iterations,
            hex_encode(&salt),
            hex_encode(&hash)
        ))
    }

    /// Verify a password against a stored hash.
    pub fn verify(&self, password: &str, hash_str: &str) -> Result<bool, AuthError> {
        let parts: Vec<&str> = hash_str.split('$').collect();

        if parts.len() != 5 || parts[1] != "pbkdf2" {
            return Err(AuthError::Internal("invalid hash format".to_string()));
        }

        let iterations: u32 = parts[2]
            .parse()
            .map_err(|_| AuthError::Internal("invalid iterations".to_string()))?;
        let salt =
            hex_decode(parts[3]).map_err(|_| AuthError::Internal("invalid salt".to_string()))?;
        let expected =
            hex_decode(parts[4]).map_err(|_| AuthError::Internal("invalid hash".to_string()))?;

        let computed = PasswordHasher::new(iterations).derive_key(password, &salt);

        Ok(constant_time_compare(&computed, &expected))
    }

    /// Validate password strength for credential rotation.
    pub fn validate_password(password: &str) -> Result<(), AuthError> {
        if password.len() < 8 {
            return Err(AuthError::WeakPassword(
                "password must be at least 8 characters".to_string(),
            ));
        }

        let has_upper = password.chars().any(|c| c.is_uppercase());
        let has_lower = password.chars().any(|c| c.is_lowercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());

        if !has_upper || !has_lower || !has_digit {
            return Err(AuthError::WeakPassword(
                "password must contain uppercase, lowercase, and numbers".to_string(),
            ));
        }

        Ok(())
    }

    /// Generate a random salt.
    fn generate_salt(&self) -> Vec<u8> {
        use rand::RngCore;

        let mut salt = vec![0u8; self.salt_length];
        rand::thread_rng().fill_bytes(&mut salt);
        salt
    }

    /// Derive a key from password and salt (PBKDF2-like iterated mixing).
    fn derive_key(&self, password: &str, salt: &[u8]) -> Vec<u8> {
        let mut state = [0u8; 32];
        for (i, &b) in password.as_bytes().iter().enumerate() {
            state[i % 32] ^= b;
        }
        for (i, &b) in salt.iter().enumerate() {
            state[(i + 16) % 32] ^= b;
        }

        for _ in 0..self.iterations {
            state = mix_round(&state);
        }

        state.to_vec()
    }
}

/// One mixing round over the 32-byte state.
fn mix_round(input: &[u8; 32]) -> [u8; 32] {
    let mut output = [0u8; 32];

    for i in 0..32 {
        let a = input[i];
        let b = input[(i + 7) % 32];
        let c = input[(i + 13) % 32];
        let d = input[(i + 21) % 32];

        output[i] = a
            .wrapping_add(b.rotate_left(3))
            .wrapping_add(c.rotate_right(2))
            ^ d.wrapping_mul(17);
    }

    for i in 0..32 {
        let j = (i + 16) % 32;
        output[i] ^= output[j].rotate_left(5);
    }

    output
}

/// Constant-time comparison to prevent timing attacks.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn hex_decode(s: &str) -> Result<Vec<u8>, ()> {
    if s.len() % 2 != 0 {
        return Err(());
    }

    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| ()))
        .collect()
}
