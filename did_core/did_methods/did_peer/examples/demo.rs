use std::error::Error;

use did_doc::schema::{
    service::DidCommService,
    verification_method::{
        PublicKeyField, VerificationMaterial, VerificationMaterialFormat,
        VerificationMethodTypeAgreement, VerificationMethodTypeAuthentication,
    },
};
use did_peer::{
    peer_did::{generate::generate_peer_did, numalgos::numalgo2::Numalgo2, PeerDid},
    resolver::{options::PeerDidResolutionOptions, PeerDidResolver},
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    demo()
}

fn demo() -> Result<(), Box<dyn Error>> {
    let authentication = VerificationMaterial::new(
        VerificationMethodTypeAuthentication::Ed25519VerificationKey2018,
        PublicKeyField::Base58 {
            public_key_base58: "ByHnpUCFb1vAfh9CFZ8ZkmUZguURW8nSw889hy6rD8L7".to_string(),
        },
    )?;
    let agreement = VerificationMaterial::new(
        VerificationMethodTypeAgreement::X25519KeyAgreementKey2020,
        PublicKeyField::Multibase {
            public_key_multibase: "z6LSbysY2xFMRpGMhb7tFTLMpeuPRaqaWM1yECx2AtzE3KCc".to_string(),
        },
    )?;
    let service = DidCommService::builder()
        .service_endpoint("https://example.com/endpoint")
        .routing_keys(vec!["did:example:somemediator#somekey".to_string()])
        .accept(vec!["didcomm/v2".to_string()])
        .build();

    let peer_did_0 = generate_peer_did('0', &[authentication.clone()], &[], &[])?;
    println!("as did:peer numalgo(0): {peer_did_0}");

    let peer_did_2 = PeerDid::<Numalgo2>::from_materials(
        &[authentication],
        &[agreement],
        &[service.into()],
    )?;
    println!("as did:peer numalgo(2): {peer_did_2}");

    let resolver = PeerDidResolver::new();
    for encoding in [
        VerificationMaterialFormat::Base58,
        VerificationMaterialFormat::Multibase,
        VerificationMaterialFormat::Jwk,
    ] {
        let did_document = resolver.resolve(
            peer_did_2.did(),
            &PeerDidResolutionOptions::new().set_encoding(encoding),
        )?;
        println!(
            "Decoded did document with {encoding} keys: \n{}",
            serde_json::to_string_pretty(&did_document)?
        );
    }

    let did_document = resolver.resolve(peer_did_0.did(), &PeerDidResolutionOptions::default())?;
    println!(
        "Decoded numalgo(0) did document: \n{}",
        serde_json::to_string_pretty(&did_document)?
    );

    Ok(())
}
