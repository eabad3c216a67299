use std::io::{BufRead, Write};

use log::{error, info, warn};
use serde_json::json;

use crate::search::SearchConfig;

use super::{handle_request, ProtocolError, SearchRequest};

/// Answers one JSON request per input line with one JSON line of output until
/// the reader is exhausted. Bad lines get an `{"error": ...}` line and the
/// loop carries on. Returns how many requests were answered with a move.
pub fn serve<R, W>(reader: R, mut writer: W, config: &SearchConfig) -> Result<usize, ProtocolError>
where
    R: BufRead,
    W: Write,
{
    let mut answered = 0;
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<SearchRequest>(line) {
            Ok(request) => match handle_request(&request, config) {
                Ok(response) => {
                    answered += 1;
                    serde_json::to_value(&response)?
                }
                Err(err) => {
                    error!("{}", err);
                    json!({"requestId": request.request_id, "error": err.to_string()})
                }
            },
            Err(err) => {
                warn!("rejecting malformed request: {}", err);
                json!({"error": err.to_string()})
            }
        };

        writeln!(writer, "{}", reply)?;
        writer.flush()?;
    }

    info!("input closed after {} answered requests", answered);
    Ok(answered)
}
