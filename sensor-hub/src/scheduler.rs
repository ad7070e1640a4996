use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::hal::{DataGroup, SensorHal};
use crate::messages::SensorSample;

/// A created sensor plus its polling period.
pub struct PolledSensor {
    pub id: String,
    pub interval: Duration,
    pub sensor: Box<dyn SensorHal>,
}

/// Spawn one polling task per sensor.
///
/// Every period the task runs an aggregate acquisition and sends a
/// [`SensorSample`] when at least one quantity was read. A task stops when
/// `shutdown` changes (or its sender is dropped) or when `tx` is closed, and
/// releases its sensor on the way out.
pub fn spawn_polling_tasks(
    sensors: Vec<PolledSensor>,
    tx: mpsc::Sender<SensorSample>,
    shutdown: watch::Receiver<bool>,
) -> Vec<JoinHandle<()>> {
    sensors
        .into_iter()
        .map(|polled| tokio::spawn(poll_sensor(polled, tx.clone(), shutdown.clone())))
        .collect()
}

async fn poll_sensor(polled: PolledSensor, tx: mpsc::Sender<SensorSample>, mut shutdown: watch::Receiver<bool>) {
    let PolledSensor { id, interval: period, mut sensor } = polled;
    info!("[{}] Starting {} polling task every {:?}", id, sensor.family(), period);

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut group = DataGroup::new();
    let mut seq = 0u64;

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = shutdown.changed() => break,
        }

        // bus reads block, so keep them off the async workers
        let acquired = tokio::task::spawn_blocking(move || {
            let result = sensor.acquire(&mut group);
            (sensor, group, result)
        })
        .await;
        let result = match acquired {
            Ok((s, g, result)) => {
                sensor = s;
                group = g;
                result
            }
            Err(e) => {
                // the sensor went down with the panicked acquisition
                error!("[{}] acquire task failed: {}", id, e);
                return;
            }
        };
        if let Err(e) = result {
            warn!("[{}] acquire failed: {}", id, e);
            continue;
        }
        if group.is_empty() {
            debug!("[{}] no quantity could be read", id);
            continue;
        }

        seq += 1;
        let sample = SensorSample::new(&id, sensor.name(), sensor.family(), seq, &group);
        if tx.send(sample).await.is_err() {
            debug!("[{}] sample receiver closed", id);
            break;
        }
    }

    if let Err(e) = sensor.release() {
        warn!("[{}] release failed: {}", id, e);
    }
    info!("[{}] polling task stopped after {} samples", id, seq);
}
