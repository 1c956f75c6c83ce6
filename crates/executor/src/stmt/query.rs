use {
    crate::{BoxedError, Executor, Outcome, Result, StorageSnafu},
    def::Storage,
    snafu::ResultExt,
    tracing::{debug, warn},
};

impl<S: Storage> Executor<S> {
    // full scan only, there is no filtering or projection yet
    pub(crate) fn select(&self) -> Result<Outcome> {
        let rows = self
            .storage
            .scan_all()
            .map_err(|e| {
                warn!("scan failed: {}", e);
                Box::new(e) as BoxedError
            })
            .context(StorageSnafu)?;

        debug!(count = rows.len(), "scanned rows");

        Ok(Outcome::Rows(rows))
    }
}
