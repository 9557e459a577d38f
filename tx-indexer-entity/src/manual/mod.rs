use crate::sea_orm_active_enums::TxStatus;

impl Default for TxStatus {
    fn default() -> Self {
        TxStatus::Unknown
    }
}

impl TxStatus {
    pub fn is_resolved(&self) -> bool {
        *self != TxStatus::Unknown
    }
}
