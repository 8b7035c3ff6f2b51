//! Full hero lifecycle test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every service
//! operation over real HTTP through a ureq-backed `Transport`. Validates
//! request building, response parsing and the recorded message log
//! end-to-end with the actual server.

use std::sync::Arc;

use hero_core::{
    ApiError, CreateHero, Hero, HeroService, HttpMethod, HttpRequest, HttpResponse, MessageLog,
    Transport, TransportError,
};

/// Executes requests with ureq.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the client
/// handle status interpretation. Only genuine network-level failures become
/// `TransportError`.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&req.path).send_empty(),
        };

        let mut response = result.map_err(|e| TransportError::new(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

fn start_mock_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn hero_lifecycle() {
    let addr = start_mock_server();

    let log = Arc::new(MessageLog::new());
    let service = HeroService::new(
        &format!("http://{addr}"),
        UreqTransport::new(),
        Arc::clone(&log),
    );

    // Step 1: list — should be empty.
    let heroes = service.get_heroes().unwrap();
    assert!(heroes.is_empty(), "expected empty list");
    assert_eq!(log.messages(), vec!["HeroClient: fetched heroes"]);
    log.clear();

    // Step 2: add a hero; the server assigns the id.
    let created = service
        .add_hero(&CreateHero {
            name: "Magneta".to_string(),
        })
        .unwrap();
    assert_eq!(created.name, "Magneta");
    let id = created.id;
    assert_eq!(log.messages(), vec![format!("HeroClient: added hero w/ id={id}")]);
    log.clear();

    // Step 3: get the created hero.
    let fetched = service.get_hero(id).unwrap();
    assert_eq!(fetched, created);
    assert_eq!(log.messages(), vec![format!("HeroClient: fetched hero id={id}")]);
    log.clear();

    // Step 4: rename via full replace.
    let ack = service
        .update_hero(&Hero {
            id,
            name: "Magneta II".to_string(),
        })
        .unwrap();
    assert_eq!(ack["id"], id);
    assert_eq!(ack["name"], "Magneta II");
    assert_eq!(log.messages(), vec![format!("HeroClient: update hero id={id}")]);
    log.clear();

    // Step 5: the rename is visible on the next read.
    let fetched = service.get_hero(id).unwrap();
    assert_eq!(fetched.name, "Magneta II");

    // Step 6: list — should have exactly one hero.
    let heroes = service.get_heroes().unwrap();
    assert_eq!(heroes.len(), 1);

    // Step 7: unknown id — typed NotFound, plus the failure log line.
    log.clear();
    let err = service.get_hero(9999).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
    assert_eq!(
        log.messages(),
        vec!["HeroClient: getHero id=9999 failed : hero not found"]
    );

    // Step 8: the fail-soft variant collapses the same miss to None.
    log.clear();
    assert!(service.get_hero_or_none(9999).is_none());
    assert_eq!(
        log.messages(),
        vec!["HeroClient: getHero id=9999 failed : hero not found"]
    );

    // Step 9: update of an unknown hero surfaces as an error.
    log.clear();
    let err = service
        .update_hero(&Hero {
            id: 9999,
            name: "Nobody".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
    assert_eq!(
        log.messages(),
        vec!["HeroClient: updateHero failed : hero not found"]
    );
}

#[test]
fn transport_failure_is_fail_soft_with_log() {
    // Nothing listens on this port; every call fails at the transport level.
    let log = Arc::new(MessageLog::new());
    let service = HeroService::new(
        "http://127.0.0.1:1",
        UreqTransport::new(),
        Arc::clone(&log),
    );

    assert!(service.get_heroes_or_empty().is_empty());

    let messages = log.messages();
    assert_eq!(messages.len(), 1);
    assert!(
        messages[0].starts_with("HeroClient: getHeroes failed : "),
        "unexpected log line: {}",
        messages[0]
    );
}
