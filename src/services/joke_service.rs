use crate::constants::JOKE_FALLBACK;
use crate::structs::joke::JokeResponse;
use reqwest::Error as ReqwestError;
use tracing::warn;

pub async fn request_joke(client: &reqwest::Client, url: &str) -> Result<JokeResponse, ReqwestError> {
    let response = client.get(url).send().await?.error_for_status()?;
    let joke = response.json::<JokeResponse>().await?;
    Ok(joke)
}

/// Never fails: any network, status or decoding error yields the fallback line.
pub async fn fetch_joke(client: &reqwest::Client, url: &str) -> String {
    match request_joke(client, url).await {
        Ok(joke) => format_joke(&joke),
        Err(err) => {
            warn!(error = %err, "error fetching joke");
            JOKE_FALLBACK.to_string()
        }
    }
}

fn format_joke(joke: &JokeResponse) -> String {
    format!("{} - {}", joke.setup, joke.punchline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_setup_and_punchline() {
        let joke = JokeResponse {
            setup: "Why did the chicken cross the road?".into(),
            punchline: "To get to the other side.".into(),
        };
        assert_eq!(
            format_joke(&joke),
            "Why did the chicken cross the road? - To get to the other side."
        );
    }

    #[actix_web::test]
    async fn unreachable_api_falls_back() {
        let client = reqwest::Client::new();
        let joke = fetch_joke(&client, "http://127.0.0.1:9/random_joke").await;
        assert_eq!(joke, JOKE_FALLBACK);
    }

    #[actix_web::test]
    async fn invalid_url_falls_back() {
        let client = reqwest::Client::new();
        assert_eq!(fetch_joke(&client, "not a url").await, JOKE_FALLBACK);
    }
}
