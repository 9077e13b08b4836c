use crate::analysis::token::Token;

pub trait TokenFilter: Send + Sync {
    /// Whether a normalized term survives this filter
    fn accepts(&self, term: &str) -> bool;

    fn accepts_token(&self, token: &Token) -> bool {
        self.accepts(&token.text)
    }

    fn clone_box(&self) -> Box<dyn TokenFilter>;
}
