use {
    crate::{BoxedError, Executor, Outcome, Result, StorageSnafu},
    def::{Row, Storage},
    snafu::ResultExt,
    tracing::{debug, warn},
};

impl<S: Storage> Executor<S> {
    pub(crate) fn insert(&mut self, row: Row) -> Result<Outcome> {
        debug!(id = row.id(), "inserting row");

        self.storage
            .insert(row)
            .map_err(|e| {
                warn!("insert failed: {}", e);
                Box::new(e) as BoxedError
            })
            .context(StorageSnafu)?;

        Ok(Outcome::Inserted)
    }
}
