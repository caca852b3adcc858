use proptest::prelude::*;

use ont_core::crypto::{
    Address, CurveLabel, KeyDescriptor, KeyType, PublicKey, Signature, SigningScheme,
};
use ont_core::transaction::{
    DeployCode, Fixed64, InvokeCode, Payload, Transaction, TransactionAttribute, TxSignature,
    TxType,
};

fn arb_scheme() -> impl Strategy<Value = SigningScheme> {
    (0usize..SigningScheme::ALL.len()).prop_map(|i| SigningScheme::ALL[i])
}

fn arb_public_key() -> impl Strategy<Value = PublicKey> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 33..=33)
            .prop_map(|key| PublicKey::new(key, KeyDescriptor::insecure_default())),
        prop::array::uniform32(any::<u8>()).prop_map(|key| PublicKey::new(
            key.to_vec(),
            KeyDescriptor::new(KeyType::Eddsa, CurveLabel::Ed25519)
        )),
    ]
}

fn arb_signature() -> impl Strategy<Value = Signature> {
    (arb_scheme(), prop::collection::vec(any::<u8>(), 1..80))
        .prop_map(|(scheme, value)| Signature::new(scheme, value))
}

fn arb_tx_signature() -> impl Strategy<Value = TxSignature> {
    (
        prop::collection::vec(arb_public_key(), 0..4),
        any::<u8>(),
        prop::collection::vec(arb_signature(), 0..4),
    )
        .prop_map(|(public_keys, m, signatures)| TxSignature {
            public_keys,
            m,
            signatures,
        })
}

fn arb_attribute() -> impl Strategy<Value = TransactionAttribute> {
    let bytes = || prop::collection::vec(any::<u8>(), 0..40);
    prop_oneof![
        bytes().prop_map(TransactionAttribute::Nonce),
        prop::array::uniform20(any::<u8>()).prop_map(|a| TransactionAttribute::Script(Address::new(a))),
        bytes().prop_map(TransactionAttribute::DescriptionUrl),
        bytes().prop_map(TransactionAttribute::Description),
    ]
}

fn arb_deploy() -> impl Strategy<Value = DeployCode> {
    (
        prop::collection::vec(any::<u8>(), 0..300),
        any::<bool>(),
        "[a-z]{0,12}",
        "[0-9.]{0,6}",
        "\\PC{0,10}",
        "[a-z@.]{0,16}",
        "\\PC{0,40}",
    )
        .prop_map(|(code, need_storage, name, version, author, email, description)| DeployCode {
            code,
            need_storage,
            name,
            version,
            author,
            email,
            description,
        })
}

/// Strategy to generate a random transaction whose payload matches its type.
fn arb_transaction() -> impl Strategy<Value = Transaction> {
    (
        any::<u8>(),
        any::<u8>(),
        prop::array::uniform4(any::<u8>()),
        any::<u64>(),
        any::<u64>(),
        prop::array::uniform20(any::<u8>()),
        prop::collection::vec(any::<u8>(), 0..300),
        arb_deploy(),
        prop::collection::vec(arb_attribute(), 0..5),
        prop::collection::vec(arb_tx_signature(), 0..3),
    )
        .prop_map(
            |(version, type_byte, nonce, gas_price, gas_limit, payer, code, deploy, attributes, signatures)| {
                let tx_type = TxType::from_byte(type_byte);
                let payload = match tx_type {
                    TxType::Deploy => Payload::Deploy(deploy),
                    _ => Payload::Invoke(InvokeCode::new(code)),
                };
                Transaction {
                    version,
                    tx_type,
                    nonce,
                    gas_price: Fixed64(gas_price),
                    gas_limit: Fixed64(gas_limit),
                    payer: Address::new(payer),
                    payload,
                    attributes,
                    signatures,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn transaction_serialize_deserialize_roundtrip(tx in arb_transaction()) {
        let bytes = tx.serialize();
        let tx2 = Transaction::deserialize(&bytes).unwrap();
        prop_assert_eq!(&tx2, &tx);
        prop_assert_eq!(tx2.serialize(), bytes);
    }

    #[test]
    fn transaction_hex_roundtrip(tx in arb_transaction()) {
        let tx2 = Transaction::from_hex(&tx.to_hex()).unwrap();
        prop_assert_eq!(tx.to_hex(), tx2.to_hex());
        prop_assert_eq!(tx.hash(), tx2.hash());
    }

    #[test]
    fn hash_ignores_signature_list(tx in arb_transaction(), extra in arb_tx_signature()) {
        let mut signed = tx.clone();
        signed.signatures.push(extra);
        prop_assert_eq!(signed.hash(), tx.hash());
    }

    #[test]
    fn deserialize_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = Transaction::deserialize(&bytes);
    }

    #[test]
    fn compact_signature_roundtrip(sig in arb_signature()) {
        let decoded = Signature::from_compact(&sig.to_compact()).unwrap();
        prop_assert_eq!(decoded, sig);
    }
}
