use rawhttp::Request;
use std::net::TcpListener;

fn main() -> std::io::Result<()> {
    env_logger::init();

    let port = std::env::var("PORT").unwrap_or_else(|_| String::from("42069"));
    let listener = TcpListener::bind(format!("0.0.0.0:{port}"))?;
    println!("Listening on port {port}");

    for stream in listener.incoming() {
        let stream = stream?;
        println!("Connection accepted");

        let request = match Request::decode_from(&stream) {
            Ok(request) => request,
            Err(err) => {
                log::error!("failed to decode request: {err}");
                continue;
            }
        };

        let line = request.request_line();
        println!("Request line:");
        println!("- Method: {}", line.method);
        println!("- Target: {}", line.target);
        println!("- Version: {}", line.version);

        println!("Headers:");
        for (name, value) in request.headers() {
            println!("- {name}: {value}");
        }

        if !request.body().is_empty() {
            println!("Body:");
            println!("{}", String::from_utf8_lossy(request.body()));
        }

        println!("Connection closed");
    }

    Ok(())
}
