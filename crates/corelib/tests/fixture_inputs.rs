//! End-to-end fixture assembly: committee pubkeys, signature, message
//! hash, JSON shape, and atomic persistence.

use blsfix_corelib::curve::{aggregate_g1, g1_from_secret_hex, g2_from_compressed_hex};
use blsfix_corelib::fixture::{
    aggregate_verify_input, pairing_input, signed_header_input, sync_committee_commitment_input,
    write_fixture,
};
use tempfile::tempdir;

const SECRET_KEYS: [&str; 4] = [
    "0x06a680317cbb1cf70c700b672e48ed01fe5fd51427808a96e17611506e13aed9",
    "0x432bcfbda728fd60570db9505d0b899a9c7c8971ec0fd58252d8028ac0aa76ce",
    "0x6688391de4d32b5779ff669fb72f81b9aaff44e926ba19d5833c5a5c50dd40d2",
    "0x4c24c0c5360b7c44210697a5fba1f705456f37969e1354e30cbd0f290d2efd4a",
];

// 5 * G2, standing in for a decompressed signature.
const SIGNATURE_HEX: &str =
    "80fb837804dba8213329db46608b6c121d973363c1234a86dd183baff112709c\
     f97096c5e9a1a770ee9d7dc641a894d60411a5de6730ffece671a9f21d65028c\
     c0f1102378de124562cb1ff49db6f004fcd14d683024b0548eff3d1468df2688";

fn committee() -> Vec<ark_bls12_381::G1Affine> {
    SECRET_KEYS
        .iter()
        .map(|sk| g1_from_secret_hex(sk).unwrap())
        .collect()
}

#[test]
fn aggregate_verify_fixture_shape() {
    let pubkeys = committee();
    let signature = g2_from_compressed_hex(SIGNATURE_HEX).unwrap();
    let bits = [true, false, true, true];
    let input = aggregate_verify_input(&pubkeys, &bits, &signature, b"johnguibas").unwrap();

    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(value["pubkeybits"], serde_json::json!([1, 0, 1, 1]));
    assert_eq!(value["pubkeys"].as_array().unwrap().len(), 4);
    assert_eq!(value["pubkeys"][0].as_array().unwrap().len(), 2);
    assert_eq!(value["pubkeys"][0][0].as_array().unwrap().len(), 7);
    // signature[x][c0] limbs of 5*G2.
    assert_eq!(value["signature"][0][0][0], "35814479910348424");
    assert_eq!(value["signature"][0][0][6], "286326001355839");
    // Hm carries the johnguibas hash.
    assert_eq!(value["Hm"][0][0][0], "20076858616866989");
    assert_eq!(value["Hm"][1][1][6], "1224505773264452");
    // The key is the circuit's exact signal name.
    assert!(value.get("hm").is_none());
}

#[test]
fn signed_header_fixture_shape() {
    let pubkeys = committee();
    let signature = g2_from_compressed_hex(SIGNATURE_HEX).unwrap();
    let bits = [true, true, true, true];
    let root = [0xabu8; 32];
    let input = signed_header_input(&root, &pubkeys, &bits, &signature).unwrap();

    let value = serde_json::to_value(&input).unwrap();
    let signing_root = value["signing_root"].as_array().unwrap();
    assert_eq!(signing_root.len(), 32);
    assert_eq!(signing_root[0], "171");
    assert!(value.get("Hm").is_none());
}

#[test]
fn sync_committee_fixture_shape() {
    let pubkeys = committee();
    let hexes: Vec<String> = vec![
        "99a02a53eed3c82c45b48b985c80fde43b69d662084384198a9d14c2289f476e\
         7a1cb154cfb497808bfe0abc943d98fd"
            .into();
        4
    ];
    let input = sync_committee_commitment_input(
        &pubkeys,
        &hexes,
        "8cc64ed5227018bf8edeb841e8342ffb205973d35618af4a44fe4f71f899ed57\
         a88085fafc23d55eb986fcf8fcfb460b",
    )
    .unwrap();

    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(value["pubkeyHex"].as_array().unwrap().len(), 4);
    assert_eq!(value["pubkeyHex"][0].as_array().unwrap().len(), 48);
    assert_eq!(value["pubkeyHex"][0][0], "153"); // 0x99
    assert_eq!(value["aggregatePubkeyHex"][0], "140"); // 0x8c
}

#[test]
fn pairing_fixture_uses_hex() {
    let pubkeys = committee();
    let agg = aggregate_g1(&pubkeys);
    let signature = g2_from_compressed_hex(SIGNATURE_HEX).unwrap();
    let input = pairing_input(&agg, &signature, b"johnguibas").unwrap();

    assert!(input.pubkey[0].starts_with("0x"));
    assert!(input.signature[0][0].starts_with("0x"));
    assert!(input.msg[0][0].starts_with("0x"));
}

#[test]
fn write_fixture_lands_complete_json() {
    let pubkeys = committee();
    let bits = [true, false, false, true];
    let input = blsfix_corelib::fixture::PubkeyAssemblyInput {
        pubkeys: pubkeys
            .iter()
            .map(|p| blsfix_corelib::fixture::g1_limbs(p).unwrap())
            .collect(),
        pubkeybits: bits.iter().map(|&b| u8::from(b)).collect(),
    };

    let dir = tempdir().unwrap();
    let path = dir.path().join("input_pubkey_addr_4.json");
    write_fixture(&path, &input).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["pubkeybits"], serde_json::json!([1, 0, 0, 1]));

    // No temp file left behind.
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn write_fixture_temp_names_track_the_full_file_name() {
    let dir = tempdir().unwrap();

    // A bystander with a truncated-extension name must survive.
    let bystander = dir.path().join("input.fixture.tmp");
    std::fs::write(&bystander, b"keep").unwrap();

    write_fixture(&dir.path().join("input.json"), &serde_json::json!({"v": 1})).unwrap();
    write_fixture(&dir.path().join("input.bak"), &serde_json::json!({"v": 2})).unwrap();

    assert_eq!(std::fs::read(&bystander).unwrap(), b"keep");
    let json = std::fs::read_to_string(dir.path().join("input.json")).unwrap();
    let bak = std::fs::read_to_string(dir.path().join("input.bak")).unwrap();
    assert_eq!(json, r#"{"v":1}"#);
    assert_eq!(bak, r#"{"v":2}"#);
}
