use atlas::api::{ApiClient, ApiError, HttpApiClient};
use atlas::config::Config;
use atlas::data::{Country, CountryRef, LIST_FIELDS};

/// The REST Countries client used by the pages.
pub struct Api {
    client: HttpApiClient,
}

impl Api {
    pub fn new(base_url: &str) -> Self {
        Api {
            client: HttpApiClient::new(base_url),
        }
    }

    pub async fn fetch_countries(&self) -> Result<Vec<Country>, ApiError> {
        self.client.get(&format!("/all?fields={LIST_FIELDS}")).await
    }

    /// Looks a country up by its exact common or official name.
    pub async fn fetch_country(&self, name: &str) -> Result<Country, ApiError> {
        let endpoint = format!("/name/{}?fullText=true", encode(name));
        let matches: Vec<Country> = self.client.get(&endpoint).await?;
        matches
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NotFound(format!("{endpoint} returned no country")))
    }

    /// Resolves cca3 border codes to countries, in the order given.
    pub async fn fetch_border_names(&self, codes: &[String]) -> Result<Vec<CountryRef>, ApiError> {
        if codes.is_empty() {
            return Ok(Vec::new());
        }
        let endpoint = format!("/alpha?codes={}&fields=name,cca3", encode(&codes.join(",")));
        let mut borders: Vec<CountryRef> = self.client.get(&endpoint).await?;
        borders.sort_by_key(|b| codes.iter().position(|c| *c == b.cca3));
        Ok(borders)
    }
}

fn encode(segment: &str) -> String {
    String::from(js_sys::encode_uri_component(segment))
}

/// Create a new instance of the API client for the given configuration.
pub fn create(config: &Config) -> Api {
    Api::new(&config.api_base_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_uses_given_config() {
        let api = create(&Config::new("http://localhost:8080/v3.1/", "app"));
        assert_eq!(api.client.url("/all"), "http://localhost:8080/v3.1/all");
    }
}
