//! Incremental decoder for `text/event-stream` bodies.

/// Splits a byte stream into SSE events and yields each event's data.
///
/// Comment lines (heartbeats) and fields other than `data` are ignored.
/// Multiple `data` lines of one event are joined with `\n`.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
    data: Vec<String>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next chunk and collect the payloads of completed events.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);

        let mut completed = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let mut line: Vec<u8> = self.buffer.drain(..=pos).collect();
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            let line = String::from_utf8_lossy(&line);

            if line.is_empty() {
                if !self.data.is_empty() {
                    completed.push(self.data.join("\n"));
                    self.data.clear();
                }
                continue;
            }
            if line.starts_with(':') {
                continue;
            }

            let (field, value) = match line.split_once(':') {
                Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
                None => (&*line, ""),
            };
            if field == "data" {
                self.data.push(value.to_string());
            }
        }
        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_event() {
        // テスト項目: data 行と空行で 1 つのイベントとして取り出される
        let mut decoder = SseDecoder::new();
        let events = decoder.feed(b"data: {\"control\":\"left\"}\n\n");
        assert_eq!(events, vec![r#"{"control":"left"}"#.to_string()]);
    }

    #[test]
    fn test_decode_event_split_across_chunks() {
        // テスト項目: チャンクをまたいだイベントも正しく組み立てられる
        // given (前提条件):
        let mut decoder = SseDecoder::new();

        // when (操作):
        let first = decoder.feed(b"data: {\"cont");
        let second = decoder.feed(b"rol\":\"right\"}\r\n");
        let third = decoder.feed(b"\r\n");

        // then (期待する結果):
        assert!(first.is_empty());
        assert!(second.is_empty());
        assert_eq!(third, vec![r#"{"control":"right"}"#.to_string()]);
    }

    #[test]
    fn test_heartbeat_comments_are_ignored() {
        // テスト項目: コメント行 (ハートビート) はイベントにならない
        let mut decoder = SseDecoder::new();
        let events = decoder.feed(b":\n\n: \n\nevent: x\nid: 1\n\ndata: a\ndata: b\n\n");
        assert_eq!(events, vec!["a\nb".to_string()]);
    }
}
