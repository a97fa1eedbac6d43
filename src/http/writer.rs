use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Writes a fully formatted response to the client.
///
/// Keeps track of how much of the buffer has gone out so short writes
/// resume where they stopped.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(wire: Vec<u8>) -> Self {
        Self {
            buffer: wire,
            written: 0,
        }
    }

    pub async fn write_to_stream<S>(&mut self, stream: &mut S) -> anyhow::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream
                .write(&self.buffer[self.written..])
                .await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}
