use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let sql = r#"
            CREATE TYPE "tx_status" AS ENUM ('success', 'fail', 'unknown');

            CREATE TABLE "txs" (
                "tx_hash" varchar PRIMARY KEY,
                "height" bigint NOT NULL,
                "time" timestamptz NOT NULL,
                "from" varchar NOT NULL DEFAULT '',
                "to" varchar NOT NULL DEFAULT '',
                "amount" jsonb NOT NULL DEFAULT '[]',
                "type" varchar NOT NULL DEFAULT '',
                "fee" jsonb NOT NULL,
                "memo" varchar NOT NULL DEFAULT '',
                "status" tx_status NOT NULL,
                "code" bigint NOT NULL DEFAULT 0,
                "log" text NOT NULL DEFAULT '',
                "gas_used" bigint NOT NULL DEFAULT 0,
                "gas_wanted" bigint NOT NULL DEFAULT 0,
                "gas_price" double precision NOT NULL DEFAULT 0,
                "actual_fee" jsonb NOT NULL,
                "proposal_id" bigint NOT NULL DEFAULT 0,
                "tags" jsonb NOT NULL DEFAULT '{}',
                "stake_create_validator" jsonb NOT NULL,
                "stake_edit_validator" jsonb NOT NULL,
                "signers" jsonb NOT NULL DEFAULT '[]',
                "types" varchar[] NOT NULL DEFAULT '{}',
                "addrs" varchar[] NOT NULL DEFAULT '{}',
                "messages" jsonb NOT NULL DEFAULT '[]'
            );

            CREATE INDEX "txs_status_height_index" ON "txs" ("status", "height" DESC);
            CREATE INDEX "txs_height_index" ON "txs" ("height");
            CREATE INDEX "txs_addrs_index" ON "txs" USING GIN ("addrs");

            COMMENT ON TABLE "txs" IS 'Decoded transactions with their execution results';
            COMMENT ON COLUMN "txs"."type" IS 'Type of the first message, kept as the single-message summary';
            COMMENT ON COLUMN "txs"."messages" IS 'Per-message payloads as {type, msg} pairs'
        "#;
        crate::from_sql(manager, sql).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let sql = r#"
            DROP TABLE "txs";
            DROP TYPE "tx_status";
        "#;

        crate::from_sql(manager, sql).await
    }
}
