use std::fmt::{self, Debug, Formatter};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: &str = "5432";
pub const DEFAULT_USER: &str = "postgres";
pub const DEFAULT_DATABASE: &str = "mydb";

pub const SCHEME: &str = "postgresql://";
pub const SEARCH_PATH_OPTION: &str = "?options=-csearch_path=";

const REDACTED_PASSWORD: &str = "****";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Host,
    Port,
    User,
    Password,
    Database,
    Schema,
}

impl FieldKind {
    /// Form order, top to bottom.
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Host,
        FieldKind::Port,
        FieldKind::User,
        FieldKind::Password,
        FieldKind::Database,
        FieldKind::Schema,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Host => "Host",
            FieldKind::Port => "Port",
            FieldKind::User => "User",
            FieldKind::Password => "Password",
            FieldKind::Database => "Database",
            FieldKind::Schema => "Schema",
        }
    }

    /// Hint shown while the field is empty.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            FieldKind::Host => Some(DEFAULT_HOST),
            FieldKind::Port => Some(DEFAULT_PORT),
            FieldKind::User => Some(DEFAULT_USER),
            FieldKind::Password => None,
            FieldKind::Database => Some(DEFAULT_DATABASE),
            FieldKind::Schema => Some("public"),
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, FieldKind::Schema)
    }

    pub fn index(&self) -> usize {
        match self {
            FieldKind::Host => 0,
            FieldKind::Port => 1,
            FieldKind::User => 2,
            FieldKind::Password => 3,
            FieldKind::Database => 4,
            FieldKind::Schema => 5,
        }
    }

    /// Next field down the form, staying on the last one.
    pub fn next(self) -> Self {
        let idx = (self.index() + 1).min(Self::ALL.len() - 1);
        Self::ALL[idx]
    }

    /// Previous field up the form, staying on the first one.
    pub fn previous(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }

    pub fn cycle_next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn cycle_previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The six free-text values the connection string is built from.
///
/// Nothing is trimmed, validated or escaped.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionFields {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub schema: String,
}

impl Default for ConnectionFields {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT.to_string(),
            user: DEFAULT_USER.to_string(),
            password: String::new(),
            database: DEFAULT_DATABASE.to_string(),
            schema: String::new(),
        }
    }
}

impl Debug for ConnectionFields {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() {
            ""
        } else {
            REDACTED_PASSWORD
        };
        f.debug_struct("ConnectionFields")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &password)
            .field("database", &self.database)
            .field("schema", &self.schema)
            .finish()
    }
}

impl ConnectionFields {
    pub fn get(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Host => &self.host,
            FieldKind::Port => &self.port,
            FieldKind::User => &self.user,
            FieldKind::Password => &self.password,
            FieldKind::Database => &self.database,
            FieldKind::Schema => &self.schema,
        }
    }

    pub fn get_mut(&mut self, kind: FieldKind) -> &mut String {
        match kind {
            FieldKind::Host => &mut self.host,
            FieldKind::Port => &mut self.port,
            FieldKind::User => &mut self.user,
            FieldKind::Password => &mut self.password,
            FieldKind::Database => &mut self.database,
            FieldKind::Schema => &mut self.schema,
        }
    }

    pub fn connection_string(&self) -> ConnectionString {
        compose(self)
    }
}

/// A composed connection string in two renderings: the real one, and one with
/// the password masked that is safe to log.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionString {
    with_secrets: String,
    no_secrets: String,
}

impl ConnectionString {
    pub fn as_str(&self) -> &str {
        &self.with_secrets
    }

    pub fn redacted(&self) -> &str {
        &self.no_secrets
    }

    /// Number of characters, as shown next to the output.
    pub fn char_count(&self) -> usize {
        self.with_secrets.chars().count()
    }
}

impl Debug for ConnectionString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.no_secrets.fmt(f)
    }
}

/// Builds
/// `postgresql://<user>[:<password>]@<host>[:<port>]/<database>[?options=-csearch_path=<schema>]`.
///
/// Empty password, port and schema drop their segment. Every other value is
/// copied verbatim, so reserved characters are not percent-encoded.
pub fn compose(fields: &ConnectionFields) -> ConnectionString {
    let with_secrets = render(fields, &fields.password);
    let no_secrets = if fields.password.is_empty() {
        with_secrets.clone()
    } else {
        render(fields, REDACTED_PASSWORD)
    };

    ConnectionString {
        with_secrets,
        no_secrets,
    }
}

fn render(fields: &ConnectionFields, password: &str) -> String {
    let mut url = String::with_capacity(
        SCHEME.len()
            + fields.user.len()
            + password.len()
            + fields.host.len()
            + fields.port.len()
            + fields.database.len()
            + fields.schema.len()
            + SEARCH_PATH_OPTION.len()
            + 4,
    );

    url.push_str(SCHEME);
    url.push_str(&fields.user);
    if !password.is_empty() {
        url.push(':');
        url.push_str(password);
    }
    url.push('@');
    url.push_str(&fields.host);
    if !fields.port.is_empty() {
        url.push(':');
        url.push_str(&fields.port);
    }
    url.push('/');
    url.push_str(&fields.database);
    if !fields.schema.is_empty() {
        url.push_str(SEARCH_PATH_OPTION);
        url.push_str(&fields.schema);
    }

    url
}
