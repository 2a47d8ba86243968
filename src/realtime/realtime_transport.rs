use futures::StreamExt;
use log::{debug, warn};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use super::realtime_model::TenderEvent;
use crate::errors::{Error, Result};

/// Connects to the push channel and forwards decoded events until the server
/// closes the stream or the receiving side is dropped.
///
/// Frames that do not decode as a `TenderEvent` are logged and skipped; a
/// broken frame never tears down the connection.
pub async fn connect_and_forward(url: &str, tx: mpsc::Sender<TenderEvent>) -> Result<()> {
    let (stream, _) = connect_async(url)
        .await
        .map_err(|e| Error::Realtime(format!("connecting to {}: {}", url, e)))?;
    debug!("Realtime channel connected: {}", url);

    let (_, mut read) = stream.split();
    while let Some(frame) = read.next().await {
        let frame = frame.map_err(|e| Error::Realtime(format!("reading frame: {}", e)))?;
        match frame {
            Message::Text(txt) => match serde_json::from_str::<TenderEvent>(txt.as_str()) {
                Ok(event) => {
                    if tx.send(event).await.is_err() {
                        debug!("Realtime receiver dropped, closing channel");
                        break;
                    }
                }
                Err(e) => warn!("Skipping malformed realtime frame: {}", e),
            },
            Message::Close(_) => {
                debug!("Realtime channel closed by server");
                break;
            }
            _ => {}
        }
    }
    Ok(())
}
