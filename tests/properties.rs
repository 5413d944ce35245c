use aead::{Aead, KeyInit, Payload};
use aegis128x2::{Aegis128X2, AegisMac128X2, Error, OVERHEAD, TAG16_SIZE};
use proptest::prelude::*;
use proptest::sample::Index;

fn bytes(max: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..max)
}

proptest! {
    #[test]
    fn roundtrip_appended(
        key in any::<[u8; 16]>(),
        nonce in any::<[u8; 16]>(),
        msg in bytes(300),
        ad in bytes(150),
    ) {
        let aead = Aegis128X2::new(&key);

        let mut sealed = Vec::new();
        aead.seal(&mut sealed, &nonce, &msg, &ad);
        prop_assert_eq!(sealed.len(), msg.len() + OVERHEAD);

        let mut opened = Vec::new();
        aead.open(&mut opened, &nonce, &sealed, &ad).unwrap();
        prop_assert_eq!(opened, msg);
    }

    #[test]
    fn roundtrip_detached(
        key in any::<[u8; 16]>(),
        nonce in any::<[u8; 16]>(),
        msg in bytes(300),
        ad in bytes(150),
    ) {
        let aead = Aegis128X2::new(&key);

        let mut ct16 = Vec::new();
        let tag16 = aead.seal_detached16(&mut ct16, &nonce, &msg, &ad);
        let mut ct32 = Vec::new();
        let tag32 = aead.seal_detached32(&mut ct32, &nonce, &msg, &ad);

        // the tag length does not change the keystream
        prop_assert_eq!(ct16.len(), msg.len());
        prop_assert_eq!(&ct16, &ct32);
        prop_assert_ne!(&tag16[..], &tag32[..16]);

        let mut opened = Vec::new();
        aead.open_detached16(&mut opened, &nonce, &ct16, &ad, &tag16).unwrap();
        prop_assert_eq!(&opened, &msg);

        let mut opened = Vec::new();
        aead.open_detached32(&mut opened, &nonce, &ct32, &ad, &tag32).unwrap();
        prop_assert_eq!(&opened, &msg);
    }

    #[test]
    fn roundtrip_in_place(
        key in any::<[u8; 16]>(),
        nonce in any::<[u8; 16]>(),
        msg in bytes(300),
        ad in bytes(150),
    ) {
        let aead = Aegis128X2::new(&key);

        let mut buf = msg.clone();
        let tag = aead.seal_in_place_detached16(&nonce, &ad, &mut buf);
        aead.open_in_place_detached16(&nonce, &ad, &mut buf, &tag).unwrap();
        prop_assert_eq!(&buf, &msg);

        let tag = aead.seal_in_place_detached32(&nonce, &ad, &mut buf);
        aead.open_in_place_detached32(&nonce, &ad, &mut buf, &tag).unwrap();
        prop_assert_eq!(&buf, &msg);
    }

    #[test]
    fn aead_trait_matches_inherent(
        key in any::<[u8; 16]>(),
        nonce in any::<[u8; 16]>(),
        msg in bytes(300),
        ad in bytes(150),
    ) {
        let aead = <Aegis128X2 as KeyInit>::new(&key.into());

        let encrypted = aead.encrypt(&nonce.into(), Payload { msg: &msg, aad: &ad }).unwrap();

        let mut sealed = Vec::new();
        Aegis128X2::new(&key).seal(&mut sealed, &nonce, &msg, &ad);
        prop_assert_eq!(&encrypted, &sealed);

        let decrypted = aead.decrypt(&nonce.into(), Payload { msg: &encrypted, aad: &ad }).unwrap();
        prop_assert_eq!(decrypted, msg);
    }

    #[test]
    fn seal_is_deterministic(
        key in any::<[u8; 16]>(),
        nonce in any::<[u8; 16]>(),
        msg in bytes(200),
        ad in bytes(100),
    ) {
        let aead = Aegis128X2::new(&key);

        let mut a = Vec::new();
        let mut b = Vec::new();
        aead.seal(&mut a, &nonce, &msg, &ad);
        aead.seal(&mut b, &nonce, &msg, &ad);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn seal_preserves_prior_bytes(
        prefix in bytes(100),
        msg in bytes(200),
    ) {
        let aead = Aegis128X2::new(&[1; 16]);

        let mut dst = prefix.clone();
        aead.seal(&mut dst, &[2; 16], &msg, b"");
        prop_assert_eq!(&dst[..prefix.len()], &prefix[..]);

        let mut opened = prefix.clone();
        aead.open(&mut opened, &[2; 16], &dst[prefix.len()..], b"").unwrap();
        prop_assert_eq!(&opened[..prefix.len()], &prefix[..]);
        prop_assert_eq!(&opened[prefix.len()..], &msg[..]);
    }

    #[test]
    fn flipped_bit_in_sealed_rejected(
        key in any::<[u8; 16]>(),
        nonce in any::<[u8; 16]>(),
        msg in bytes(200),
        ad in bytes(100),
        at in any::<Index>(),
        bit in 0..8u8,
    ) {
        let aead = Aegis128X2::new(&key);

        let mut sealed = Vec::new();
        aead.seal(&mut sealed, &nonce, &msg, &ad);
        let i = at.index(sealed.len());
        sealed[i] ^= 1 << bit;

        let mut opened = b"prior".to_vec();
        prop_assert_eq!(aead.open(&mut opened, &nonce, &sealed, &ad), Err(Error::TagMismatch));
        prop_assert_eq!(opened, b"prior");

        // same input through the in-place path must leave nothing behind
        let (ct, tag) = sealed.split_at_mut(msg.len());
        let tag: [u8; TAG16_SIZE] = (&*tag).try_into().unwrap();
        prop_assert_eq!(
            aead.open_in_place_detached16(&nonce, &ad, ct, &tag),
            Err(Error::TagMismatch)
        );
        prop_assert!(ct.iter().all(|&b| b == 0));
    }

    #[test]
    fn flipped_bit_in_ad_rejected(
        key in any::<[u8; 16]>(),
        nonce in any::<[u8; 16]>(),
        msg in bytes(200),
        mut ad in bytes(100),
        at in any::<Index>(),
        bit in 0..8u8,
    ) {
        prop_assume!(!ad.is_empty());
        let aead = Aegis128X2::new(&key);

        let mut buf = msg.clone();
        let tag = aead.seal_in_place_detached32(&nonce, &ad, &mut buf);

        let i = at.index(ad.len());
        ad[i] ^= 1 << bit;

        prop_assert_eq!(
            aead.open_in_place_detached32(&nonce, &ad, &mut buf, &tag),
            Err(Error::TagMismatch)
        );
        prop_assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn short_ciphertext_rejected(
        key in any::<[u8; 16]>(),
        ciphertext in bytes(TAG16_SIZE),
    ) {
        let mut dst = Vec::new();
        prop_assert_eq!(
            Aegis128X2::new(&key).open(&mut dst, &[0; 16], &ciphertext, b""),
            Err(Error::CiphertextTooSmall)
        );
        prop_assert!(dst.is_empty());
    }

    #[test]
    fn mac_verifies_own_tags(
        key in any::<[u8; 16]>(),
        nonce in any::<[u8; 16]>(),
        data in bytes(300),
    ) {
        let mac = AegisMac128X2::new(&key);

        let tag16 = mac.sum16(&nonce, &data);
        let tag32 = mac.sum32(&nonce, &data);
        prop_assert_eq!(mac.verify16(&nonce, &data, &tag16), Ok(()));
        prop_assert_eq!(mac.verify32(&nonce, &data, &tag32), Ok(()));

        let mut extended = data.clone();
        extended.push(0);
        prop_assert_eq!(mac.verify16(&nonce, &extended, &tag16), Err(Error::TagMismatch));
    }
}
