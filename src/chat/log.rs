use super::{ChatError, HistoryFile, Message, Role, Transcript};

/// The in-memory transcript paired with its backing file.
///
/// Every mutation is applied in memory first and then saved. When a
/// save fails the in-memory copy is kept and the log is marked dirty
/// until the next successful save.
#[derive(Debug)]
pub struct ChatLog {
    transcript: Transcript,
    file: HistoryFile,
    system_message: String,
    dirty: bool,
}

impl ChatLog {
    /// Restores the transcript from `file`, falling back to the seed
    /// message when there is nothing usable on disk.
    pub async fn open(file: HistoryFile, system_message: &str) -> Self {
        let restored = file.load().await.and_then(|messages| {
            let count = messages.len();
            let transcript = Transcript::from_messages(messages);
            match &transcript {
                Some(_) => tracing::info!(
                    "Loaded {} messages from {}",
                    count,
                    file.path().display()
                ),
                None => tracing::warn!(
                    "Ignoring {}: message ids are out of range",
                    file.path().display()
                ),
            }
            transcript
        });
        let transcript = restored.unwrap_or_else(|| Transcript::seeded(system_message));

        Self {
            transcript,
            file,
            system_message: system_message.to_string(),
            dirty: false,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn file(&self) -> &HistoryFile {
        &self.file
    }

    /// True when the in-memory transcript has changes the file is
    /// missing.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub async fn append(&mut self, role: Role, content: &str) -> Result<Message, ChatError> {
        let msg = self.transcript.append(role, content)?;
        tracing::debug!("Appended message {} ({})", msg.id, msg.role);
        self.persist().await?;
        Ok(msg)
    }

    pub async fn update(
        &mut self,
        id: u64,
        role: Role,
        content: &str,
    ) -> Result<Message, ChatError> {
        let msg = self.transcript.update(id, role, content)?.clone();
        tracing::debug!("Updated message {} ({})", msg.id, msg.role);
        self.persist().await?;
        Ok(msg)
    }

    /// Clears the transcript, deletes the backing file, and puts the
    /// seed message back.
    pub async fn reset(&mut self) -> Result<(), ChatError> {
        self.transcript.reset();
        self.transcript.seed(&self.system_message);

        match self.file.erase().await {
            Ok(()) => {
                self.dirty = false;
                tracing::info!("History reset");
                Ok(())
            }
            Err(e) => {
                self.dirty = true;
                Err(e.into())
            }
        }
    }

    /// Saves the current transcript, e.g. to retry after a failure.
    pub async fn persist(&mut self) -> Result<(), ChatError> {
        match self.file.save(self.transcript.messages()).await {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(e) => {
                tracing::error!("History is out of sync with disk: {}", e);
                self.dirty = true;
                Err(e.into())
            }
        }
    }
}
