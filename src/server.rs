//! TCP Server.
//!
//! [`Server::serve`] accepts connections until its [`Shutdown`] is triggered. Each connection
//! is served by an independent blocking worker which decodes one [`Request`], calls the
//! [`Handler`] with a [`ResponseWriter`] bound to the same stream, then closes the connection.
//!
//! In flight connections are not cancelled by shutdown.
#![cfg_attr(not(feature = "log"), allow(unused_variables, reason = "logger"))]
use std::net::{SocketAddr, TcpStream};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::{fmt, io};
use tokio::net::{TcpListener, ToSocketAddrs};
use tokio::sync::Notify;

use crate::error::Error;
use crate::log::{debug, error, info, warning};
use crate::request::{DecodeConfig, Request};
use crate::response::ResponseWriter;

#[cfg(test)]
mod test;

/// Per request application logic.
///
/// The handler owns the response entirely and must follow [`ResponseWriter`] stage ordering.
pub trait Handler: Send + Sync + 'static {
    fn call(&self, w: &mut ResponseWriter<TcpStream>, req: &mut Request) -> Result<(), Error>;
}

impl<F> Handler for F
where
    F: Fn(&mut ResponseWriter<TcpStream>, &mut Request) -> Result<(), Error> + Send + Sync + 'static,
{
    #[inline]
    fn call(&self, w: &mut ResponseWriter<TcpStream>, req: &mut Request) -> Result<(), Error> {
        self(w, req)
    }
}

// ===== Shutdown =====

/// Server shutdown signal.
///
/// Cloned handles share the same signal.
#[derive(Clone, Default)]
pub struct Shutdown {
    shared: Arc<Shared>,
}

#[derive(Default)]
struct Shared {
    triggered: AtomicBool,
    notify: Notify,
}

impl Shutdown {
    /// Create new untriggered [`Shutdown`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Trigger the shutdown, waking the accept loop.
    pub fn trigger(&self) {
        self.shared.triggered.store(true, Ordering::SeqCst);
        self.shared.notify.notify_waiters();
    }

    /// Returns `true` if shutdown was triggered.
    #[inline]
    pub fn is_triggered(&self) -> bool {
        self.shared.triggered.load(Ordering::SeqCst)
    }

    /// Wait until shutdown is triggered.
    pub async fn wait(&self) {
        // registered before the flag check, so a trigger in between is not missed
        let notified = self.shared.notify.notified();
        if self.is_triggered() {
            return;
        }
        notified.await;
    }
}

impl fmt::Debug for Shutdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shutdown")
            .field("triggered", &self.is_triggered())
            .finish()
    }
}

// ===== Server =====

/// HTTP/1.1 server.
#[derive(Debug)]
pub struct Server<H> {
    listener: TcpListener,
    handler: Arc<H>,
    shutdown: Shutdown,
    config: DecodeConfig,
}

impl<H: Handler> Server<H> {
    /// Bind a TCP listener on `addr`.
    pub async fn bind(addr: impl ToSocketAddrs, handler: H) -> io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self::new(listener, handler))
    }

    /// Create server from existing listener.
    pub fn new(listener: TcpListener, handler: H) -> Self {
        Self {
            listener,
            handler: Arc::new(handler),
            shutdown: Shutdown::new(),
            config: DecodeConfig::default(),
        }
    }

    /// Set request decoding configuration.
    pub fn decode_config(mut self, config: DecodeConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the address the server is listening on.
    #[inline]
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Returns a handle to stop [`serve`].
    ///
    /// [`serve`]: Server::serve
    #[inline]
    pub fn shutdown_handle(&self) -> Shutdown {
        self.shutdown.clone()
    }

    /// Accept connections until shutdown is triggered.
    ///
    /// Accept errors are logged and accepting continues, unless shutdown is already triggered.
    pub async fn serve(self) {
        loop {
            let accept = tokio::select! {
                biased;
                _ = self.shutdown.wait() => break,
                accept = self.listener.accept() => accept,
            };

            match accept {
                Ok((stream, addr)) => {
                    debug!("accepted connection from {addr}");
                    if let Err(err) = self.spawn_connection(stream) {
                        error!("failed to serve connection from {addr}: {err}");
                    }
                }
                Err(_) if self.shutdown.is_triggered() => break,
                Err(err) => {
                    error!("accept error: {err}");
                }
            }
        }

        info!("server stopped accepting connections");
    }

    fn spawn_connection(&self, stream: tokio::net::TcpStream) -> io::Result<()> {
        let stream = stream.into_std()?;
        stream.set_nonblocking(false)?;

        let handler = Arc::clone(&self.handler);
        let config = self.config;

        tokio::task::spawn_blocking(move || match serve_connection(stream, &*handler, &config) {
            Ok(()) => {}
            Err(Error::Decode(err)) => {
                warning!("closing connection, failed to decode request: {err}");
            }
            Err(err) => {
                error!("handler failed: {err}");
            }
        });

        Ok(())
    }
}

/// Serve a single request on a blocking stream.
///
/// The stream is closed when this function returns.
pub fn serve_connection<H: Handler + ?Sized>(
    stream: TcpStream,
    handler: &H,
    config: &DecodeConfig,
) -> Result<(), Error> {
    let mut request = Request::decode_with(&stream, config)?;
    debug!(
        "{} {} HTTP/{}",
        request.request_line().method,
        request.request_line().target,
        request.request_line().version
    );

    let mut writer = ResponseWriter::new(stream);
    handler.call(&mut writer, &mut request)?;
    writer.flush()?;

    Ok(())
}
