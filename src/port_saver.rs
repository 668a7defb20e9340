use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Orbit, Rocket};
use std::sync::Mutex;
use tokio::sync::oneshot;

/// Returns a fairing that reports the port the server actually bound to, and
/// the handle that receives it. Needed when binding port 0.
pub fn create_pair() -> (PortSaver, Port) {
    let (tx, rx) = oneshot::channel();
    let port_saver = PortSaver {
        sender: Mutex::new(Some(tx)),
    };
    (port_saver, Port { rx })
}

pub struct Port {
    rx: oneshot::Receiver<u16>,
}

impl Port {
    /// Resolves once the server has lifted off.
    pub async fn get(self) -> Result<u16, oneshot::error::RecvError> {
        self.rx.await
    }
}

pub struct PortSaver {
    sender: Mutex<Option<oneshot::Sender<u16>>>,
}

#[rocket::async_trait]
impl Fairing for PortSaver {
    fn info(&self) -> Info {
        Info {
            name: "Port Saver",
            kind: Kind::Liftoff,
        }
    }

    async fn on_liftoff(&self, rocket: &Rocket<Orbit>) {
        let sender = match self.sender.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(sender) = sender {
            let port = rocket.config().port;
            if sender.send(port).is_err() {
                tracing::warn!("Nobody is waiting for the bound port ({})", port);
            }
        }
    }
}
