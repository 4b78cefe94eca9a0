//! Minimal HTTP/1.1 server answering fixed bodies by request target.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

/// Serve `routes` (request target to JSON body) until the process exits.
/// Unknown targets get a 404.
pub fn serve(routes: HashMap<String, String>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
    let addr = listener.local_addr().expect("test server addr");
    let routes = Arc::new(routes);

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { continue };
            let routes = Arc::clone(&routes);
            thread::spawn(move || respond(stream, &routes));
        }
    });

    addr
}

fn respond(mut stream: TcpStream, routes: &HashMap<String, String>) {
    let Ok(reader) = stream.try_clone() else {
        return;
    };
    let mut reader = BufReader::new(reader);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).unwrap_or(0) == 0 {
        return;
    }
    loop {
        let mut header = String::new();
        match reader.read_line(&mut header) {
            Ok(0) | Err(_) => break,
            Ok(_) if header == "\r\n" => break,
            Ok(_) => {}
        }
    }

    let target = request_line.split_whitespace().nth(1).unwrap_or("/");
    let (status, body) = match routes.get(target) {
        Some(body) => ("200 OK", body.as_str()),
        None => ("404 Not Found", ""),
    };

    let _ = write!(
        stream,
        "HTTP/1.1 {status}\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.flush();
}
