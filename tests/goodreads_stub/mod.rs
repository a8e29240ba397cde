use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct StubPage {
    /// Full request target including the query string, e.g. `/search?q=python+programming`.
    pub target: String,
    pub status: u16,
    pub body: String,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct RecordedRequest {
    pub target: String,
    pub user_agent: Option<String>,
    pub accept_language: Option<String>,
}

pub struct GoodreadsStub {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl GoodreadsStub {
    pub fn spawn(pages: Vec<StubPage>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start goodreads stub server");
        let addr = server.server_addr();
        let base_url = format!("http://{addr}");

        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            loop {
                if shutdown_rx.try_recv().is_ok() {
                    break;
                }

                let request = match server.recv_timeout(Duration::from_millis(50)) {
                    Ok(Some(req)) => req,
                    Ok(None) => continue,
                    Err(_) => break,
                };

                let header = |name: &'static str| {
                    request
                        .headers()
                        .iter()
                        .find(|h| h.field.equiv(name))
                        .map(|h| h.value.as_str().to_owned())
                };
                let target = request.url().to_string();
                recorded
                    .lock()
                    .expect("lock recorded requests")
                    .push(RecordedRequest {
                        target: target.clone(),
                        user_agent: header("User-Agent"),
                        accept_language: header("Accept-Language"),
                    });

                let response = match pages.iter().find(|p| p.target == target) {
                    Some(page) => tiny_http::Response::from_string(page.body.clone())
                        .with_status_code(page.status)
                        .with_header(
                            "Content-Type: text/html; charset=utf-8"
                                .parse::<tiny_http::Header>()
                                .expect("content-type header"),
                        ),
                    None => tiny_http::Response::from_string("not found").with_status_code(404),
                };
                let _ = request.respond(response);
            }
        });

        Self {
            base_url,
            requests,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    pub fn url(&self, target: &str) -> String {
        format!("{}{target}", self.base_url)
    }

    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("lock recorded requests").clone()
    }
}

impl Drop for GoodreadsStub {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

pub fn book_row(title: &str, author: &str, rating: Option<&str>) -> String {
    let rating = rating
        .map(|r| {
            format!(
                r#"<span class="greyText smallText uitext">
                <span class="minirating"><span class="stars staticStars"></span> {r}</span>
              </span>"#
            )
        })
        .unwrap_or_default();
    format!(
        r#"<tr itemscope itemtype="http://schema.org/Book">
  <td width="100%" valign="top">
    <a class="bookTitle" itemprop="url" href="/book/show/1">
      <span itemprop='name' role='heading' aria-level='4'>{title}</span>
    </a>
    <br/>
    <span class='by'>by</span>
    <span itemprop='author' itemscope='' itemtype='http://schema.org/Person'>
      <div class='authorName__container'>
        <a class="authorName" itemprop="url" href="/author/show/1"><span itemprop="name">{author}</span></a>
      </div>
    </span>
    <br/>
    <div>
      {rating}
    </div>
  </td>
</tr>
"#
    )
}

pub fn search_page(rows: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head><title>Search results</title></head>
  <body>
    <table class="tableList">
{}
    </table>
  </body>
</html>
"#,
        rows.concat()
    )
}
