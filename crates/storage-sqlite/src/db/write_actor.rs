//! Single-writer actor for SQLite mutations.
//!
//! SQLite allows one writer at a time; funneling every mutation through one
//! dedicated connection avoids writer contention and makes each job a
//! serialized, transactional unit. Margin upserts, price appends, and
//! seeding all run here.

use diesel::SqliteConnection;
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

use super::DbPool;
use crate::errors::StorageError;
use margindesk_core::errors::Result;

// A write job: runs against the actor's connection, returns a type-erased
// value so one channel can carry jobs with different result types.
type Job = Box<dyn FnOnce(&mut SqliteConnection) -> Result<Box<dyn Any + Send + 'static>> + Send + 'static>;

type JobEnvelope = (Job, oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>);

/// Handle for submitting write jobs to the actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<JobEnvelope>,
}

impl WriteHandle {
    /// Executes `job` on the writer's dedicated connection, inside an
    /// immediate transaction, and returns its result.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .expect("writer actor receiver closed; the actor has stopped");

        ret_rx
            .await
            .expect("writer actor dropped the reply sender without answering")
            .map(|boxed| {
                *boxed
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("writer actor result had an unexpected type"))
            })
    }
}

/// Spawns the writer actor. It checks out one pool connection and processes
/// jobs serially for the lifetime of the process; dropping every
/// `WriteHandle` shuts it down.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<JobEnvelope>(1024);

    tokio::spawn(async move {
        let mut conn = pool
            .get()
            .expect("failed to reserve the writer actor's database connection");

        while let Some((job, reply_tx)) = rx.recv().await {
            let result = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(|e: StorageError| e.into());

            // Receiver may be gone if the request was cancelled; partial
            // work was already rolled back by the transaction.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}
