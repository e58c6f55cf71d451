use std::any::Any;

use diesel::SqliteConnection;
use log::{debug, error};
use tokio::sync::{mpsc, oneshot};

use savings_predictor_core::errors::{DatabaseError, Error, Result};

use super::DbPool;
use crate::errors::StorageError;

const WRITE_QUEUE_CAPACITY: usize = 1024;

// Jobs run against the writer's connection; results are type-erased so one
// channel can carry every job type.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;
type ErasedResult = Result<Box<dyn Any + Send + 'static>>;
type Envelope = (Job<Box<dyn Any + Send + 'static>>, oneshot::Sender<ErasedResult>);

fn writer_unavailable() -> Error {
    Error::Database(DatabaseError::ConnectionFailed(
        "database writer is not running".to_string(),
    ))
}

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<Envelope>,
}

impl WriteHandle {
    /// Runs `job` on the writer's dedicated connection inside an immediate
    /// transaction. Jobs are executed one at a time in submission order.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                reply_tx,
            ))
            .await
            .map_err(|_| writer_unavailable())?;

        let boxed = reply_rx.await.map_err(|_| writer_unavailable())??;
        boxed.downcast::<T>().map(|v| *v).map_err(|_| {
            Error::Database(DatabaseError::Internal(
                "writer returned an unexpected result type".to_string(),
            ))
        })
    }
}

/// Spawns the single writer task. It holds one pooled connection for its
/// whole lifetime and stops once every `WriteHandle` is dropped.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<Envelope>(WRITE_QUEUE_CAPACITY);

    tokio::spawn(async move {
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                error!("Database writer could not acquire a connection: {}", e);
                while let Some((_, reply_tx)) = rx.recv().await {
                    let _ = reply_tx.send(Err(Error::Database(
                        DatabaseError::ConnectionFailed(e.to_string()),
                    )));
                }
                return;
            }
        };

        while let Some((job, reply_tx)) = rx.recv().await {
            let result: ErasedResult = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(Error::from);

            // The caller may have gone away; nothing to do then.
            let _ = reply_tx.send(result);
        }
        debug!("Database writer stopped");
    });

    WriteHandle { tx }
}
