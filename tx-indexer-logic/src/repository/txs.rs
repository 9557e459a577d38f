use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tx_indexer_entity::{
    sea_orm_active_enums::TxStatus,
    txs::{ActiveModel, Column, Entity, Model},
};

use super::{TxRepository, TxResultUpdate};
use crate::types::TxRecord;

#[derive(Debug, Clone)]
pub struct PostgresTxRepository {
    db: Arc<DatabaseConnection>,
}

impl PostgresTxRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TxRepository for PostgresTxRepository {
    async fn insert(&self, record: &TxRecord) -> anyhow::Result<bool> {
        let active: ActiveModel = record_to_model(record)?.into();
        let inserted = Entity::insert(active)
            .on_conflict(OnConflict::column(Column::TxHash).do_nothing().to_owned())
            .exec_without_returning(self.db.as_ref())
            .await?;
        Ok(inserted > 0)
    }

    async fn find_unknown(&self, skip: u64, limit: u64) -> anyhow::Result<Vec<TxRecord>> {
        Entity::find()
            .filter(Column::Status.eq(TxStatus::Unknown))
            .order_by_desc(Column::Height)
            .order_by_asc(Column::TxHash)
            .offset(skip)
            .limit(limit)
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(model_to_record)
            .collect()
    }

    async fn apply_result(&self, update: &TxResultUpdate) -> anyhow::Result<bool> {
        let active = ActiveModel {
            actual_fee: Set(serde_json::to_value(&update.actual_fee)?),
            status: Set(update.status),
            tags: Set(serde_json::to_value(&update.tags)?),
            messages: Set(serde_json::to_value(&update.messages)?),
            code: Set(update.code as i64),
            log: Set(update.log.clone()),
            gas_wanted: Set(update.gas_wanted),
            ..Default::default()
        };
        let result = Entity::update_many()
            .set(active)
            .filter(Column::TxHash.eq(update.tx_hash.as_str()))
            .filter(Column::Status.eq(TxStatus::Unknown))
            .exec(self.db.as_ref())
            .await
            .inspect_err(|e| {
                tracing::error!(tx_hash = %update.tx_hash, err = ?e, "failed to update tx result")
            })?;
        Ok(result.rows_affected > 0)
    }

    async fn find_by_hash(&self, tx_hash: &str) -> anyhow::Result<Option<TxRecord>> {
        Entity::find_by_id(tx_hash.to_string())
            .one(self.db.as_ref())
            .await?
            .map(model_to_record)
            .transpose()
    }
}

fn record_to_model(record: &TxRecord) -> anyhow::Result<Model> {
    Ok(Model {
        tx_hash: record.tx_hash.clone(),
        height: record.height,
        time: record.time.fixed_offset(),
        from: record.from.clone(),
        to: record.to.clone(),
        amount: serde_json::to_value(&record.amount)?,
        r#type: record.tx_type.clone(),
        fee: serde_json::to_value(&record.fee)?,
        memo: record.memo.clone(),
        status: record.status,
        code: record.code as i64,
        log: record.log.clone(),
        gas_used: record.gas_used,
        gas_wanted: record.gas_wanted,
        gas_price: record.gas_price,
        actual_fee: serde_json::to_value(&record.actual_fee)?,
        proposal_id: i64::try_from(record.proposal_id).context("proposal id overflow")?,
        tags: serde_json::to_value(&record.tags)?,
        stake_create_validator: serde_json::to_value(&record.stake_create_validator)?,
        stake_edit_validator: serde_json::to_value(&record.stake_edit_validator)?,
        signers: serde_json::to_value(&record.signers)?,
        types: record.types.clone(),
        addrs: record.addrs.clone(),
        messages: serde_json::to_value(&record.messages)?,
    })
}

fn from_json<T: DeserializeOwned>(
    value: serde_json::Value,
    field: &str,
    tx_hash: &str,
) -> anyhow::Result<T> {
    serde_json::from_value(value).with_context(|| format!("invalid {field} of tx {tx_hash}"))
}

fn model_to_record(model: Model) -> anyhow::Result<TxRecord> {
    let hash = model.tx_hash.as_str();
    let amount = from_json(model.amount, "amount", hash)?;
    let fee = from_json(model.fee, "fee", hash)?;
    let actual_fee = from_json(model.actual_fee, "actual_fee", hash)?;
    let tags = from_json(model.tags, "tags", hash)?;
    let stake_create_validator =
        from_json(model.stake_create_validator, "stake_create_validator", hash)?;
    let stake_edit_validator = from_json(model.stake_edit_validator, "stake_edit_validator", hash)?;
    let signers = from_json(model.signers, "signers", hash)?;
    let messages = from_json(model.messages, "messages", hash)?;

    Ok(TxRecord {
        tx_hash: model.tx_hash,
        height: model.height,
        time: model.time.with_timezone(&Utc),
        fee,
        memo: model.memo,
        signers,
        status: model.status,
        code: u32::try_from(model.code).context("tx code out of range")?,
        log: model.log,
        gas_used: model.gas_used,
        gas_wanted: model.gas_wanted,
        gas_price: model.gas_price,
        actual_fee,
        tags,
        messages,
        tx_type: model.r#type,
        from: model.from,
        to: model.to,
        amount,
        types: model.types,
        addrs: model.addrs,
        proposal_id: u64::try_from(model.proposal_id).context("negative proposal id")?,
        stake_create_validator,
        stake_edit_validator,
    })
}
