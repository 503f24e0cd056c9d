//! Derivation of the control stream endpoint from a room's share URL.

use reqwest::Url;

use crate::error::ClientError;

/// Turn `<scheme>://<host>/...?room=<id>` into
/// `<scheme>://<host>/api/present?room_id=<id>`.
///
/// # Errors
///
/// * `ClientError::InvalidUrl` - the URL does not parse or does not carry
///   exactly one `room` parameter
pub fn present_endpoint(room_url: &str) -> Result<Url, ClientError> {
    let url = Url::parse(room_url).map_err(|e| ClientError::InvalidUrl(format!("{room_url}: {e}")))?;

    let rooms: Vec<String> = url
        .query_pairs()
        .filter(|(key, _)| key == "room")
        .map(|(_, value)| value.into_owned())
        .collect();
    let [room] = rooms.as_slice() else {
        return Err(ClientError::InvalidUrl(format!(
            "{room_url}: expected exactly one 'room' parameter"
        )));
    };

    let mut endpoint = url
        .join("/api/present")
        .map_err(|e| ClientError::InvalidUrl(format!("{room_url}: {e}")))?;
    endpoint.set_query(None);
    endpoint.set_fragment(None);
    endpoint.query_pairs_mut().append_pair("room_id", room);
    Ok(endpoint)
}
