//! Connection Tests
//!
//! Tests for the TCP control connection against a loopback server thread.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use csdict::network::{Connection, LineTransport};
use csdict::{Config, DictError, Session, SessionState};

// =============================================================================
// Helper Functions
// =============================================================================

/// Serve one client: send a greeting, then answer the n-th request with
/// the n-th reply block. Returns the requests received.
fn spawn_server(greeting: &'static str, replies: Vec<Vec<&'static str>>) -> (u16, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut writer = stream.try_clone().unwrap();
        let mut reader = BufReader::new(stream);
        let mut received = Vec::new();
        let mut replies = replies.into_iter();

        write!(writer, "{}\r\n", greeting).unwrap();

        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap_or(0) == 0 {
                break;
            }
            let request = line.trim_end().to_string();
            let is_quit = request == "QUIT";
            received.push(request);

            if is_quit {
                let _ = write!(writer, "221 bye\r\n");
                break;
            }
            if let Some(block) = replies.next() {
                for reply in block {
                    write!(writer, "{}\r\n", reply).unwrap();
                }
            }
        }
        received
    });

    (port, handle)
}

fn test_config(debug: bool) -> Config {
    Config::builder()
        .debug(debug)
        .connect_timeout_ms(2000)
        .read_timeout_ms(2000)
        .write_timeout_ms(2000)
        .build()
}

// =============================================================================
// Connection Tests
// =============================================================================

#[test]
fn test_connection_reads_greeting() {
    let (port, handle) = spawn_server("220 loopback ready", vec![]);

    let mut connection = Connection::open("127.0.0.1", port, &test_config(false)).unwrap();
    assert_eq!(connection.read_line().unwrap().as_deref(), Some("220 loopback ready"));
    assert!(connection.peer_addr().contains(&port.to_string()));

    connection.send_line("QUIT").unwrap();
    assert_eq!(connection.read_line().unwrap().as_deref(), Some("221 bye"));

    assert_eq!(handle.join().unwrap(), vec!["QUIT"]);
}

#[test]
fn test_refused_connection_fails_to_open() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let result = Connection::open("127.0.0.1", port, &test_config(false));

    match result {
        Err(DictError::ConnectionFailed { host, port: p }) => {
            assert_eq!(host, "127.0.0.1");
            assert_eq!(p, port);
        }
        Err(other) => panic!("Expected ConnectionFailed, got {:?}", other),
        Ok(_) => panic!("Expected ConnectionFailed, got a connection"),
    }
}

#[test]
fn test_read_timeout_is_connection_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        thread::sleep(Duration::from_millis(500));
        drop(stream);
    });

    let config = Config::builder().read_timeout_ms(100).build();
    let mut connection = Connection::open("127.0.0.1", port, &config).unwrap();

    let result = connection.read_line();
    assert!(matches!(result, Err(DictError::ConnectionFailed { .. })));

    handle.join().unwrap();
}

#[test]
fn test_peer_close_is_end_of_stream() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        stream.write_all(b"220 hi\r\n").unwrap();
    });

    let mut connection = Connection::open("127.0.0.1", port, &test_config(false)).unwrap();
    handle.join().unwrap();

    assert_eq!(connection.read_line().unwrap().as_deref(), Some("220 hi"));
    assert_eq!(connection.read_line().unwrap(), None);
}

// =============================================================================
// Session over TCP Tests
// =============================================================================

#[test]
fn test_session_define_over_tcp() {
    let (port, handle) = spawn_server(
        "220 loopback ready",
        vec![vec![
            "150 1 definitions found",
            "151 \"house\" wn \"WordNet\"",
            "a dwelling",
            ".",
            "250 ok",
        ]],
    );

    let mut session = Session::new(test_config(false));
    session.open("127.0.0.1", port).unwrap();
    session.set_database("wn").unwrap();

    let result = session.define("house").unwrap();
    assert_eq!(result.lines, vec!["@a dwelling", "."]);

    session.close().unwrap();
    assert_eq!(session.state(), SessionState::Disconnected);
    assert_eq!(session.database(), "*");

    assert_eq!(handle.join().unwrap(), vec!["DEFINE wn house", "QUIT"]);
}

#[test]
fn test_session_fallback_over_tcp() {
    let (port, handle) = spawn_server(
        "220 loopback ready",
        vec![
            vec!["552 no match"],
            vec!["152 1 matches found", "wn \"housefly\"", ".", "250 ok"],
        ],
    );

    let mut session = Session::new(test_config(true));
    session.open("127.0.0.1", port).unwrap();

    let result = session.define("housefl").unwrap();
    assert_eq!(
        result.lines,
        vec![
            "> DEFINE * housefl",
            "<-- 552 no match",
            "***No definition found***",
            "> MATCH * prefix housefl",
            "<-- 152 1 matches found",
            "wn \"housefly\"",
            ".",
            "<-- 250 ok",
        ]
    );

    session.quit();
    assert_eq!(
        handle.join().unwrap(),
        vec!["DEFINE * housefl", "MATCH * prefix housefl", "QUIT"]
    );
}

#[test]
fn test_session_survives_server_disconnect() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut writer: TcpStream = stream.try_clone().unwrap();
        writer.write_all(b"220 hi\r\n").unwrap();
        let mut reader = BufReader::new(stream);
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        writer.write_all(b"110 2 databases present\r\n").unwrap();
    });

    let mut session = Session::new(test_config(false));
    session.open("127.0.0.1", port).unwrap();

    let result = session.show_databases();
    handle.join().unwrap();

    let err = result.unwrap_err();
    assert_eq!(err.code(), 925);
    assert!(!session.is_connected());
}
