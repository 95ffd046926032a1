use secrecy::SecretString;

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: String,
    pub session_token: SecretString,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: String) -> Self {
        Self {
            api_url,
            session_token: SecretString::default(),
        }
    }

    pub fn set_session_token(&mut self, token: SecretString) {
        self.session_token = token;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_global_args() {
        let api_url = "https://api.vendi.dev".to_string();
        let args = GlobalArgs::new(api_url);
        assert_eq!(args.api_url, "https://api.vendi.dev");
        assert_eq!(args.session_token.expose_secret(), "");
    }

    #[test]
    fn test_set_session_token() {
        let mut args = GlobalArgs::new("https://api.vendi.dev".to_string());
        args.set_session_token(SecretString::from("sid".to_string()));
        assert_eq!(args.session_token.expose_secret(), "sid");
    }
}
