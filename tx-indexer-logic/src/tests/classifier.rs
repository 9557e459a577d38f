use pretty_assertions::assert_eq;
use prost::Message;
use prost_types::Any;
use rstest::rstest;

use crate::{
    codec::{proto, Bech32Codec},
    msgs::*,
    node::Attribute,
    resolver::{TAG_PROPOSAL_ID, TAG_REWARD_TOTAL},
    settings::AddressSettings,
    test_utils::builder::{coin, send},
    types::{Coin, TxRecord, TxType},
};

fn codec() -> Bech32Codec {
    Bech32Codec::new(&AddressSettings::default()).unwrap()
}

fn any<M: InnerMsg>(msg: M) -> Any {
    Any {
        type_url: M::TYPE_URL.to_string(),
        value: msg.encode_to_vec(),
    }
}

fn classify_any(any: &Any, attributes: &[Attribute]) -> Option<ClassifiedMsg> {
    let codec = codec();
    let ctx = MsgContext {
        tx_hash: "ABCD",
        attributes,
        codec: &codec,
    };
    MsgRegistry::default().classify(any, &ctx)
}

fn classify<M: InnerMsg>(msg: M, attributes: &[Attribute]) -> Option<ClassifiedMsg> {
    classify_any(&any(msg), attributes)
}

fn s(value: &str) -> String {
    value.to_string()
}

#[test]
fn registry_knows_every_message_type() {
    let registry = MsgRegistry::default();
    assert_eq!(registry.len(), 27);
    for type_url in [
        "/irishub.bank.MsgSend",
        "/irishub.slashing.MsgUnjail",
        "/irishub.gov.MsgSubmitTaxUsageProposal",
        "/irishub.asset.MsgTransferGatewayOwner",
        "/irishub.nft.MsgEditNFT",
        "/irishub.evidence.MsgSubmitEvidence",
    ] {
        assert!(registry.contains(type_url), "{type_url} is not registered");
    }
}

#[rstest]
#[case::send(any(send("iaa1from", "iaa1to", vec![coin("iris", "1")])), TxType::Transfer, "iaa1from", "iaa1to", vec![Coin::new("iris", 1.0)], vec!["iaa1from", "iaa1to"])]
#[case::burn(any(MsgBurn { owner: s("iaa1owner"), coins: vec![coin("IRIS", "3")] }), TxType::Burn, "iaa1owner", "", vec![Coin::new("iris", 3.0)], vec!["iaa1owner"])]
#[case::create_validator(any(MsgCreateValidator { delegator_address: s("iaa1del"), validator_address: s("iva1val"), pub_key: vec![1u8; 33], delegation: Some(coin("iris", "100")), ..Default::default() }), TxType::CreateValidator, "iaa1del", "iva1val", vec![Coin::new("iris", 100.0)], vec!["iaa1del", "iva1val"])]
#[case::edit_validator(any(MsgEditValidator { validator_address: s("iva1val"), ..Default::default() }), TxType::EditValidator, "iva1val", "", vec![], vec!["iva1val"])]
#[case::delegate(any(MsgDelegate { delegator_address: s("iaa1del"), validator_address: s("iva1val"), delegation: Some(coin("iris", "7")) }), TxType::Delegate, "iaa1del", "iva1val", vec![Coin::new("iris", 7.0)], vec!["iaa1del", "iva1val"])]
#[case::begin_unbonding(any(MsgBeginUnbonding { delegator_address: s("iaa1del"), validator_address: s("iva1val"), shares_amount: s("2.5000000000") }), TxType::BeginUnbonding, "iaa1del", "iva1val", vec![Coin::new("", 2.5)], vec!["iaa1del", "iva1val"])]
#[case::begin_redelegate(any(MsgBeginRedelegate { delegator_address: s("iaa1del"), validator_src_address: s("iva1src"), validator_dst_address: s("iva1dst"), shares_amount: s("4") }), TxType::BeginRedelegate, "iaa1del", "iva1dst", vec![Coin::new("", 4.0)], vec!["iaa1del", "iva1src", "iva1dst"])]
#[case::unjail(any(MsgUnjail { validator_address: s("iva1val") }), TxType::Unjail, "iva1val", "", vec![], vec!["iva1val"])]
#[case::set_withdraw_address(any(MsgSetWithdrawAddress { delegator_address: s("iaa1del"), withdraw_address: s("iaa1withdraw") }), TxType::SetWithdrawAddress, "iaa1del", "iaa1withdraw", vec![], vec!["iaa1del", "iaa1withdraw"])]
#[case::withdraw_delegator_reward(any(MsgWithdrawDelegatorReward { delegator_address: s("iaa1del"), validator_address: s("iva1val") }), TxType::WithdrawDelegatorReward, "iaa1del", "iva1val", vec![Coin::new("iris", 5.0)], vec!["iaa1del", "iva1val"])]
#[case::withdraw_delegator_rewards_all(any(MsgWithdrawDelegatorRewardsAll { delegator_address: s("iaa1del") }), TxType::WithdrawDelegatorRewardsAll, "iaa1del", "", vec![Coin::new("iris", 5.0)], vec!["iaa1del"])]
#[case::withdraw_validator_rewards_all(any(MsgWithdrawValidatorRewardsAll { validator_address: s("iva1val") }), TxType::WithdrawValidatorRewardsAll, "iva1val", "", vec![Coin::new("iris", 5.0)], vec!["iva1val"])]
#[case::submit_proposal(any(MsgSubmitProposal { proposer: s("iaa1prop"), initial_deposit: vec![coin("iris", "10")], ..Default::default() }), TxType::SubmitProposal, "iaa1prop", "", vec![Coin::new("iris", 10.0)], vec!["iaa1prop"])]
#[case::submit_software_upgrade_proposal(any(MsgSubmitSoftwareUpgradeProposal { proposer: s("iaa1prop"), initial_deposit: vec![coin("iris", "10")], ..Default::default() }), TxType::SubmitProposal, "iaa1prop", "", vec![Coin::new("iris", 10.0)], vec!["iaa1prop"])]
#[case::submit_tax_usage_proposal(any(MsgSubmitTaxUsageProposal { proposer: s("iaa1prop"), initial_deposit: vec![coin("iris", "10")], ..Default::default() }), TxType::SubmitProposal, "iaa1prop", "", vec![Coin::new("iris", 10.0)], vec!["iaa1prop"])]
#[case::deposit(any(MsgDeposit { proposal_id: 1, depositor: s("iaa1dep"), amount: vec![coin("iris", "2")] }), TxType::Deposit, "iaa1dep", "", vec![Coin::new("iris", 2.0)], vec!["iaa1dep"])]
#[case::vote(any(MsgVote { proposal_id: 1, voter: s("iaa1voter"), option: s("Yes") }), TxType::Vote, "iaa1voter", "", vec![], vec!["iaa1voter"])]
#[case::issue_token(any(MsgIssueToken { owner: s("iaa1owner"), symbol: s("BTC"), ..Default::default() }), TxType::IssueToken, "iaa1owner", "", vec![], vec!["iaa1owner"])]
#[case::edit_token(any(MsgEditToken { token_id: s("X.BTC"), owner: s("iaa1owner"), ..Default::default() }), TxType::EditToken, "iaa1owner", "", vec![], vec!["iaa1owner"])]
#[case::mint_token(any(MsgMintToken { token_id: s("btc"), owner: s("iaa1owner"), to: s("iaa1to"), amount: 1 }), TxType::MintToken, "iaa1owner", "iaa1to", vec![], vec!["iaa1owner", "iaa1to"])]
#[case::transfer_token_owner(any(MsgTransferTokenOwner { src_owner: s("iaa1src"), dst_owner: s("iaa1dst"), token_id: s("btc") }), TxType::TransferTokenOwner, "iaa1src", "iaa1dst", vec![], vec!["iaa1src", "iaa1dst"])]
#[case::create_gateway(any(MsgCreateGateway { owner: s("iaa1owner"), moniker: s("gw"), ..Default::default() }), TxType::CreateGateway, "iaa1owner", "", vec![], vec!["iaa1owner"])]
#[case::edit_gateway(any(MsgEditGateway { owner: s("iaa1owner"), moniker: s("gw"), ..Default::default() }), TxType::EditGateway, "iaa1owner", "", vec![], vec!["iaa1owner"])]
#[case::transfer_gateway_owner(any(MsgTransferGatewayOwner { owner: s("iaa1owner"), moniker: s("gw"), to: s("iaa1to") }), TxType::TransferGatewayOwner, "iaa1owner", "iaa1to", vec![], vec!["iaa1owner", "iaa1to"])]
#[case::edit_nft(any(MsgEditNft { sender: s("iaa1sender"), id: s("cat"), denom: s("kitties"), ..Default::default() }), TxType::EditNft, "iaa1sender", "", vec![], vec!["iaa1sender"])]
#[case::transfer_nft(any(MsgTransferNft { sender: s("iaa1sender"), recipient: s("iaa1recipient"), id: s("cat"), denom: s("kitties"), ..Default::default() }), TxType::TransferNft, "iaa1sender", "iaa1recipient", vec![], vec!["iaa1sender", "iaa1recipient"])]
#[case::submit_evidence(any(MsgSubmitEvidence { submitter: s("iaa1submitter"), evidence: None }), TxType::SubmitEvidence, "iaa1submitter", "", vec![], vec!["iaa1submitter"])]
fn classifies_every_message_type(
    #[case] msg: Any,
    #[case] tx_type: TxType,
    #[case] from: &str,
    #[case] to: &str,
    #[case] amount: Vec<Coin>,
    #[case] addrs: Vec<&str>,
) {
    let attributes = [
        Attribute::new(TAG_REWARD_TOTAL, "5iris"),
        Attribute::new(TAG_PROPOSAL_ID, "1"),
    ];
    let classified = classify_any(&msg, &attributes).unwrap();
    assert_eq!(classified.tx_type, tx_type);
    assert_eq!(classified.from, from);
    assert_eq!(classified.to, to);
    assert_eq!(classified.amount, amount);
    assert_eq!(classified.addrs, addrs);
}

#[test]
fn issue_token_lowercases_gateway_and_symbol() {
    let msg = MsgIssueToken {
        owner: s("iaa1owner"),
        gateway: s("MyGateway"),
        symbol: s("BTC"),
        name: s("Bitcoin"),
        ..Default::default()
    };
    let classified = classify(msg, &[]).unwrap();
    assert_eq!(classified.payload["gateway"], "mygateway");
    assert_eq!(classified.payload["symbol"], "btc");
    assert_eq!(classified.payload["name"], "Bitcoin");
}

#[test]
fn submit_evidence_payload_names_the_evidence_type() {
    let msg = MsgSubmitEvidence {
        submitter: s("iaa1submitter"),
        evidence: Some(Any {
            type_url: s("/irishub.evidence.Equivocation"),
            value: vec![1, 2, 3],
        }),
    };
    let classified = classify(msg, &[]).unwrap();
    assert_eq!(classified.payload["submitter"], "iaa1submitter");
    assert_eq!(
        classified.payload["evidence_type"],
        "/irishub.evidence.Equivocation"
    );
    assert_eq!(classified.payload["evidence"], "AQID");
}

#[test]
fn transfer_uses_first_input_and_output() {
    let mut msg = send("iaa1from", "iaa1to", vec![coin("IRIS-ATTO", "15.5")]);
    msg.inputs.push(Input {
        address: "iaa1second".to_string(),
        coins: vec![],
    });

    let classified = classify(msg, &[]).unwrap();
    assert_eq!(classified.tx_type, TxType::Transfer);
    assert_eq!(classified.from, "iaa1from");
    assert_eq!(classified.to, "iaa1to");
    assert_eq!(classified.amount, vec![Coin::new("iris-atto", 15.5)]);
    assert_eq!(classified.addrs, vec!["iaa1from", "iaa1second", "iaa1to"]);
    assert_eq!(
        classified.payload["inputs"][0]["coins"][0]["denom"],
        "iris-atto"
    );
}

#[rstest]
#[case::with_tag(vec![Attribute::new(TAG_REWARD_TOTAL, "12iris,3stake")], vec![Coin::new("iris", 12.0), Coin::new("stake", 3.0)])]
#[case::without_tag(vec![], vec![])]
#[case::unparsable_item(vec![Attribute::new(TAG_REWARD_TOTAL, "12iris,oops")], vec![Coin::new("iris", 12.0)])]
fn reward_amount_comes_from_tags(#[case] attributes: Vec<Attribute>, #[case] expected: Vec<Coin>) {
    let msg = MsgWithdrawDelegatorReward {
        delegator_address: "iaa1delegator".to_string(),
        validator_address: "iva1validator".to_string(),
    };
    let classified = classify(msg, &attributes).unwrap();
    assert_eq!(classified.tx_type, TxType::WithdrawDelegatorReward);
    assert_eq!(classified.amount, expected);
    assert_eq!(classified.addrs, vec!["iaa1delegator", "iva1validator"]);
}

#[rstest]
#[case::present("7", 7)]
#[case::malformed("seven", 0)]
fn submitted_proposal_id_comes_from_tags(#[case] tag: &str, #[case] expected: u64) {
    let msg = MsgSubmitSoftwareUpgradeProposal {
        proposer: "iaa1proposer".to_string(),
        initial_deposit: vec![coin("iris", "1000")],
        version: 2,
        ..Default::default()
    };
    let attributes = [Attribute::new(TAG_PROPOSAL_ID, tag)];
    let classified = classify(msg, &attributes).unwrap();
    assert_eq!(classified.tx_type, TxType::SubmitProposal);
    assert_eq!(classified.proposal_id, Some(expected));
    assert_eq!(classified.amount, vec![Coin::new("iris", 1000.0)]);
    assert_eq!(classified.payload["version"], 2);
}

#[test]
fn deposit_and_vote_carry_their_proposal_id() {
    let deposit = MsgDeposit {
        proposal_id: 4,
        depositor: "iaa1depositor".to_string(),
        amount: vec![coin("iris", "10")],
    };
    let classified = classify(deposit, &[Attribute::new(TAG_PROPOSAL_ID, "99")]).unwrap();
    assert_eq!(classified.proposal_id, Some(4));
    assert_eq!(classified.from, "iaa1depositor");

    let vote = MsgVote {
        proposal_id: 5,
        voter: "iaa1voter".to_string(),
        option: "Yes".to_string(),
    };
    let classified = classify(vote, &[]).unwrap();
    assert_eq!(classified.tx_type, TxType::Vote);
    assert_eq!(classified.proposal_id, Some(5));
    assert!(classified.amount.is_empty());
}

#[test]
fn create_validator_builds_stake_document() {
    let msg = MsgCreateValidator {
        description: Some(proto::Description {
            moniker: "node".to_string(),
            website: "https://example.com".to_string(),
            ..Default::default()
        }),
        delegator_address: "iaa1delegator".to_string(),
        validator_address: "iva1validator".to_string(),
        pub_key: vec![9u8; 33],
        delegation: Some(coin("IRIS", "100")),
        ..Default::default()
    };
    let classified = classify(msg, &[]).unwrap();
    assert_eq!(classified.amount, vec![Coin::new("iris", 100.0)]);
    let doc = classified.stake_create_validator.unwrap();
    assert!(doc.pub_key.starts_with("fvp1"), "{}", doc.pub_key);
    assert_eq!(doc.description.moniker, "node");
    assert_eq!(doc.description.website, "https://example.com");
}

#[test]
fn create_validator_with_unconvertible_pubkey() {
    let msg = MsgCreateValidator {
        delegator_address: "iaa1delegator".to_string(),
        validator_address: "iva1validator".to_string(),
        ..Default::default()
    };
    let classified = classify(msg, &[]).unwrap();
    assert_eq!(classified.stake_create_validator.unwrap().pub_key, "");
    assert!(classified.amount.is_empty());
}

#[rstest]
#[case::absent(None, "")]
#[case::present(Some("0.1".to_string()), "0.1")]
fn edit_validator_commission_rate(#[case] rate: Option<String>, #[case] expected: &str) {
    let msg = MsgEditValidator {
        validator_address: "iva1validator".to_string(),
        commission_rate: rate,
        ..Default::default()
    };
    let classified = classify(msg, &[]).unwrap();
    assert_eq!(classified.from, "iva1validator");
    assert_eq!(classified.to, "");
    assert_eq!(
        classified.stake_edit_validator.unwrap().commission_rate,
        expected
    );
}

#[test]
fn redelegation_amount_is_shares_without_denom() {
    let msg = MsgBeginRedelegate {
        delegator_address: "iaa1delegator".to_string(),
        validator_src_address: "iva1src".to_string(),
        validator_dst_address: "iva1dst".to_string(),
        shares_amount: "10.5000000000".to_string(),
    };
    let classified = classify(msg, &[]).unwrap();
    assert_eq!(classified.to, "iva1dst");
    assert_eq!(classified.amount, vec![Coin::new("", 10.5)]);
    assert_eq!(classified.addrs, vec!["iaa1delegator", "iva1src", "iva1dst"]);
}

#[test]
fn identifiers_are_lowercased() {
    let msg = MsgTransferNft {
        sender: "iaa1sender".to_string(),
        recipient: "iaa1recipient".to_string(),
        denom: "Kitties".to_string(),
        id: "Cat-01".to_string(),
        uri: "https://Example.com/Cat".to_string(),
        data: String::new(),
    };
    let classified = classify(msg, &[]).unwrap();
    assert_eq!(classified.tx_type.to_string(), "TransferNFT");
    assert_eq!(classified.payload["denom"], "kitties");
    assert_eq!(classified.payload["id"], "cat-01");
    assert_eq!(classified.payload["uri"], "https://Example.com/Cat");

    let msg = MsgMintToken {
        token_id: "X.Token".to_string(),
        owner: "iaa1owner".to_string(),
        to: "iaa1to".to_string(),
        amount: 10,
    };
    let classified = classify(msg, &[]).unwrap();
    assert_eq!(classified.payload["token_id"], "x.token");
    assert_eq!(classified.addrs, vec!["iaa1owner", "iaa1to"]);
}

#[test]
fn unknown_or_undecodable_messages_are_skipped() {
    let codec = codec();
    let ctx = MsgContext {
        tx_hash: "ABCD",
        attributes: &[],
        codec: &codec,
    };
    let registry = MsgRegistry::default();

    let unknown = Any {
        type_url: "/irishub.oracle.MsgCreateFeed".to_string(),
        value: vec![],
    };
    assert_eq!(registry.classify(&unknown, &ctx), None);

    let corrupt = Any {
        type_url: MsgSend::TYPE_URL.to_string(),
        value: vec![0x0a, 0xff],
    };
    assert_eq!(registry.classify(&corrupt, &ctx), None);
}

#[test]
fn only_first_message_sets_summary_fields() {
    let mut record = TxRecord::default();
    let first = classify(
        MsgVote {
            proposal_id: 3,
            voter: "iaa1voter".to_string(),
            option: "No".to_string(),
        },
        &[],
    )
    .unwrap();
    let second = classify(
        send("iaa1from", "iaa1to", vec![coin("iris", "1")]),
        &[],
    )
    .unwrap();

    first.apply(0, &mut record);
    second.apply(1, &mut record);

    assert_eq!(record.tx_type, "Vote");
    assert_eq!(record.from, "iaa1voter");
    assert_eq!(record.to, "");
    assert!(record.amount.is_empty());
    assert_eq!(record.proposal_id, 3);
    assert_eq!(record.types, vec!["Vote", "Transfer"]);
    assert_eq!(record.addrs, vec!["iaa1voter", "iaa1from", "iaa1to"]);
    assert_eq!(record.messages.len(), 2);
    assert_eq!(record.messages[1].msg_type, "Transfer");
}
