//! Hybrid encryption round trips.

use ecelgamal::{
    AffinePoint, Ciphertext, Error, PublicKey, Secp256k1, SecretKey, UNCOMPRESSED_POINT_LEN,
    decrypt, encrypt, generate_keys,
    weierstrass::{BigUint, Error as CurveError, PrimeCurveParams, point_multiply},
};
use proptest::prelude::*;
use rand_core::{OsRng, TryRngCore};

#[test]
fn hello_world() {
    let mut rng = OsRng.unwrap_err();
    let (sk, pk) = generate_keys(&mut rng).unwrap();

    let ciphertext = encrypt(&mut rng, &pk, b"HELLO WORLD!!").unwrap();
    assert_eq!(ciphertext.len(), 13);
    assert_ne!(ciphertext.payload(), b"HELLO WORLD!!");
    assert!(ciphertext.ephemeral().is_on_curve());

    assert_eq!(decrypt(&sk, &ciphertext).unwrap(), b"HELLO WORLD!!");
}

#[test]
fn empty_message() {
    let mut rng = OsRng.unwrap_err();
    let (sk, pk) = generate_keys(&mut rng).unwrap();

    let ciphertext = encrypt(&mut rng, &pk, &[]).unwrap();
    assert!(ciphertext.is_empty());
    assert!(decrypt(&sk, &ciphertext).unwrap().is_empty());
}

#[test]
fn encryption_is_randomized() {
    let mut rng = OsRng.unwrap_err();
    let (_, pk) = generate_keys(&mut rng).unwrap();

    let a = encrypt(&mut rng, &pk, b"same message").unwrap();
    let b = encrypt(&mut rng, &pk, b"same message").unwrap();
    assert_ne!(a.ephemeral(), b.ephemeral());
    assert_ne!(a.payload(), b.payload());
}

#[test]
fn wrong_key_yields_garbage() {
    let mut rng = OsRng.unwrap_err();
    let (_, pk) = generate_keys(&mut rng).unwrap();
    let (other_sk, _) = generate_keys(&mut rng).unwrap();

    let msg = b"attack at dawn, bring snacks";
    let ciphertext = encrypt(&mut rng, &pk, msg).unwrap();
    let recovered = decrypt(&other_sk, &ciphertext).unwrap();

    assert_eq!(recovered.len(), msg.len());
    assert_ne!(recovered, msg);
}

#[test]
fn bit_flip_is_malleable() {
    let mut rng = OsRng.unwrap_err();
    let (sk, pk) = generate_keys(&mut rng).unwrap();

    let ciphertext = encrypt(&mut rng, &pk, b"pay 100").unwrap();
    let mut payload = ciphertext.payload().to_vec();
    payload[4] ^= 0x01 ^ 0x09;

    let tampered = Ciphertext::new(ciphertext.ephemeral().clone(), payload);
    assert_eq!(decrypt(&sk, &tampered).unwrap(), b"pay 900");
}

#[test]
fn serialized_round_trip() {
    let mut rng = OsRng.unwrap_err();
    let (sk, pk) = generate_keys(&mut rng).unwrap();

    let ciphertext = encrypt(&mut rng, &pk, b"wrapped").unwrap();
    let bytes = ciphertext.to_bytes();
    assert_eq!(bytes.len(), UNCOMPRESSED_POINT_LEN + 7);

    let parsed = Ciphertext::from_bytes(&bytes).unwrap();
    assert_eq!(parsed, ciphertext);
    assert_eq!(decrypt(&sk, &parsed).unwrap(), b"wrapped");
}

#[test]
fn serialized_identity_is_rejected() {
    let ciphertext = Ciphertext::new(AffinePoint::IDENTITY, vec![0; 70]);
    assert_eq!(Ciphertext::from_bytes(&ciphertext.to_bytes()), Err(Error::InvalidPoint));
}

#[test]
fn off_curve_ephemeral_is_rejected() {
    let mut bytes = AffinePoint::generator().to_sec1_bytes();
    bytes[1] ^= 0x80;
    bytes.extend_from_slice(b"payload");

    assert_eq!(Ciphertext::from_bytes(&bytes), Err(Error::InvalidPoint));
}

#[test]
fn session_key_wrap() {
    // 448-bit symmetric key and 64-bit IV, wrapped as one buffer
    let session_key: Vec<u8> = (0u8..56).map(|i| i.wrapping_mul(37) ^ 0x5a).collect();
    let iv = [0xa5u8, 0x17, 0x00, 0xff, 0x42, 0x99, 0x3c, 0xc3];

    let mut rng = OsRng.unwrap_err();
    let (sk, pk) = generate_keys(&mut rng).unwrap();

    let mut plaintext = session_key.clone();
    plaintext.extend_from_slice(&iv);

    let wire = encrypt(&mut rng, &pk, &plaintext).unwrap().to_bytes();
    assert_eq!(wire.len(), UNCOMPRESSED_POINT_LEN + 64);

    let recovered = decrypt(&sk, &Ciphertext::from_bytes(&wire).unwrap()).unwrap();
    let (key, recovered_iv) = recovered.split_at(56);
    assert_eq!(key, session_key.as_slice());
    assert_eq!(recovered_iv, iv);
}

#[test]
fn public_key_from_sec1() {
    let sk = SecretKey::from_slice(&[7]).unwrap();
    let pk = sk.public_key().unwrap();

    assert_eq!(PublicKey::from_sec1_bytes(&pk.to_sec1_bytes()).unwrap(), pk);
}

#[test]
fn multiply_by_group_order_is_rejected() {
    let g = AffinePoint::generator();
    let n = Secp256k1::order();

    assert_eq!(point_multiply(&n, &g), Err(CurveError::InvalidScalar));
    assert_eq!(
        point_multiply(&(&n + 1u32), &g),
        Err(CurveError::InvalidScalar)
    );
    assert_eq!(
        point_multiply(&BigUint::from(0u32), &g),
        Err(CurveError::InvalidScalar)
    );

    // (n - 1)·G = -G
    let minus_g = point_multiply(&(&n - 1u32), &g).unwrap();
    let (gx, gy) = g.coordinates().unwrap();
    let (x, y) = minus_g.coordinates().unwrap();
    assert_eq!(x, gx);
    assert_eq!(y + gy, Secp256k1::field_modulus());
    assert!(minus_g.add(&g).unwrap().is_identity());
}

prop_compose! {
    fn secret_key()(bytes in any::<[u8; 32]>()) -> SecretKey {
        // top byte cleared keeps the value below the group order
        let mut bytes = bytes;
        bytes[0] = 0;
        bytes[31] |= 1;
        SecretKey::from_slice(&bytes).unwrap()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn round_trip(sk in secret_key(), msg in proptest::collection::vec(any::<u8>(), 0..300)) {
        let mut rng = OsRng.unwrap_err();
        let pk = sk.public_key().unwrap();

        let ciphertext = encrypt(&mut rng, &pk, &msg).unwrap();
        prop_assert_eq!(ciphertext.len(), msg.len());
        prop_assert_eq!(decrypt(&sk, &ciphertext).unwrap(), msg);
    }

    #[test]
    fn public_key_is_on_curve(sk in secret_key()) {
        let pk = sk.public_key().unwrap();
        prop_assert!(pk.as_affine().is_on_curve());
        prop_assert!(!pk.as_affine().is_identity());
    }
}
