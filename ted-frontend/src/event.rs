use crossterm::event::Event;
use futures::{FutureExt, Stream, StreamExt};
use tokio::{
    select,
    sync::{
        mpsc::{self, Receiver},
        oneshot,
    },
    task::JoinHandle,
};
use ted_keymap::{conversion, message::KeymapMessage, MessageResolver};

use crate::error::AppError;

#[derive(Debug)]
pub struct Envelope {
    pub messages: Vec<Message>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    Keymap(KeymapMessage),
    Resize(u16, u16),
}

pub struct Emitter {
    cancellation: Option<oneshot::Sender<oneshot::Sender<bool>>>,
    pub receiver: Receiver<Envelope>,
}

impl Emitter {
    pub fn start(resolver: MessageResolver) -> Self {
        let (sender, receiver) = mpsc::channel(1);
        let (cancellation, cancellation_receiver) = oneshot::channel();

        start_crossterm_listener(cancellation_receiver, resolver, sender);

        Self {
            cancellation: Some(cancellation),
            receiver,
        }
    }

    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.receiver.close();

        if let Some(cancellation) = self.cancellation.take() {
            let (sender, receiver) = oneshot::channel();
            if let Err(error) = cancellation.send(sender) {
                tracing::warn!("input listener already stopped: {:?}", error);
                return Ok(());
            }

            receiver.await?;
        }

        Ok(())
    }
}

fn start_crossterm_listener(
    cancellation_receiver: oneshot::Receiver<oneshot::Sender<bool>>,
    resolver: MessageResolver,
    sender: mpsc::Sender<Envelope>,
) {
    let reader = crossterm::event::EventStream::new();
    start_listener(reader, cancellation_receiver, resolver, sender);
}

fn start_listener<S>(
    mut reader: S,
    mut cancellation_receiver: oneshot::Receiver<oneshot::Sender<bool>>,
    resolver: MessageResolver,
    sender: mpsc::Sender<Envelope>,
) -> JoinHandle<()>
where
    S: Stream<Item = std::io::Result<Event>> + Send + Unpin + 'static,
{
    tokio::spawn(async move {
        loop {
            let crossterm_event = reader.next().fuse();

            select! {
                cancellation = &mut cancellation_receiver => {
                    if let Ok(sender) = cancellation {
                        if sender.send(true).is_err() {
                            tracing::warn!("shutdown acknowledgement was not received");
                        }
                    }
                    break
                }
                event = crossterm_event => match event {
                    Some(Ok(event)) => {
                        if let Some(envelope) = handle_crossterm_event(&resolver, event) {
                            if let Err(error) = sender.send(envelope).await {
                                tracing::debug!("dropping input after receiver closed: {:?}", error);
                            }
                        }
                    }
                    Some(Err(error)) => {
                        tracing::error!("reading terminal input failed: {:?}", error);
                        break;
                    }
                    None => {
                        tracing::debug!("terminal input stream ended");
                        break;
                    }
                },
            }
        }

        tracing::debug!("input listener stopped");
    })
}

fn handle_crossterm_event(
    resolver: &MessageResolver,
    event: Event,
) -> Option<Envelope> {
    match event {
        Event::Key(key) => {
            let key = conversion::to_key(&key)?;
            let message = resolver.add_key(key)?;

            Some(Envelope {
                messages: vec![Message::Keymap(message)],
            })
        }
        Event::Resize(x, y) => Some(Envelope {
            messages: vec![Message::Resize(x, y)],
        }),
        _ => None,
    }
}
