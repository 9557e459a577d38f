mod classifier;

use crate::{parser::TxParser, settings::AddressSettings};

fn parser() -> TxParser {
    TxParser::new(&AddressSettings::default()).unwrap()
}
