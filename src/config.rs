use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb_uri: String,
    pub web_port: u16,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            mongodb_uri: env::var("MONGODB_URI").expect("MONGODB_URI must be set"),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("WEB_PORT must be a valid port number"),
        })
    }

    pub fn web_addr(&self) -> String {
        format!("0.0.0.0:{}", self.web_port)
    }
}
