use rawhttp::{Error, Headers, Request, ResponseWriter, Server, StatusCode, default_headers};
use sha1::{Digest, Sha1};
use std::fmt::Write;
use std::net::TcpStream;

const DEFAULT_PORT: u16 = 42069;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let server = Server::bind(("0.0.0.0", port), handler).await?;
    let shutdown = server.shutdown_handle();
    log::info!("server started on port {port}");

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("shutting down");
            shutdown.trigger();
        }
    });

    server.serve().await;
    log::info!("server gracefully stopped");
    Ok(())
}

fn handler(w: &mut ResponseWriter<TcpStream>, req: &mut Request) -> Result<(), Error> {
    let target = req.request_line().target.as_str();

    if let Some(count) = target.strip_prefix("/chunked/") {
        let count = count.parse().unwrap_or(8);
        return chunked(w, count);
    }

    match target {
        "/yourproblem" => page(
            w,
            StatusCode::BAD_REQUEST,
            "Bad Request",
            "Your request honestly kinda sucked.",
        ),
        "/myproblem" => page(
            w,
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            "Okay, you know what? This one is on me.",
        ),
        _ => page(
            w,
            StatusCode::OK,
            "Success!",
            "Your request was an absolute banger.",
        ),
    }
}

fn page(
    w: &mut ResponseWriter<TcpStream>,
    status: StatusCode,
    title: &str,
    message: &str,
) -> Result<(), Error> {
    let body = format!(
        "<html>\n  <head>\n    <title>{} {title}</title>\n  </head>\n  <body>\n    <h1>{title}</h1>\n    <p>{message}</p>\n  </body>\n</html>\n",
        status.as_u16(),
    );

    let mut headers = default_headers();
    headers.replace("Content-Type", "text/html");
    headers.replace("Content-Length", body.len().to_string());

    w.write_status_line(status)?;
    w.write_headers(&headers)?;
    w.write_body(body.as_bytes())?;
    Ok(())
}

/// Stream `count` generated lines as chunks, followed by digest trailers.
fn chunked(w: &mut ResponseWriter<TcpStream>, count: usize) -> Result<(), Error> {
    let mut headers = default_headers();
    headers.remove("Content-Length");
    headers.replace("Transfer-Encoding", "chunked");
    headers.set("Trailer", "x-content-sha1, x-content-length");

    w.write_status_line(StatusCode::OK)?;
    w.write_headers(&headers)?;

    let mut hasher = Sha1::new();
    let mut len = 0;

    for i in 0..count {
        let line = format!("chunk number {i}\n");
        hasher.update(line.as_bytes());
        len += line.len();
        w.write_chunked_body(line.as_bytes())?;
    }
    w.write_chunked_body_done()?;

    let digest = hasher.finalize().iter().fold(String::new(), |mut hex, byte| {
        let _ = write!(hex, "{byte:02x}");
        hex
    });

    let mut trailers = Headers::new();
    trailers.set("X-Content-SHA1", digest);
    trailers.set("X-Content-Length", len.to_string());
    w.write_trailers(&trailers)?;
    Ok(())
}
