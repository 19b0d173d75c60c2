use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use url::Url;

/// One namespace link from the MDN landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiIndexEntry {
    pub name: String,
    pub href: Url,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiType {
    Types,
    Properties,
    Functions,
    Events,
}

impl ApiType {
    pub const ALL: [ApiType; 4] = [
        ApiType::Types,
        ApiType::Properties,
        ApiType::Functions,
        ApiType::Events,
    ];

    /// Id of the MDN heading that precedes the category's definition list.
    pub fn mdn_section(self) -> &'static str {
        match self {
            ApiType::Types => "Types",
            ApiType::Properties => "Properties",
            ApiType::Functions => "Functions",
            ApiType::Events => "Events",
        }
    }

    pub fn chrome_id_prefix(self) -> &'static str {
        match self {
            ApiType::Types => "type-",
            ApiType::Properties => "property-",
            ApiType::Functions => "method-",
            ApiType::Events => "event-",
        }
    }

    pub fn chrome_id(self, member: &str) -> String {
        format!("{}{}", self.chrome_id_prefix(), member)
    }
}

impl std::fmt::Display for ApiType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = match self {
            ApiType::Types => "types",
            ApiType::Properties => "properties",
            ApiType::Functions => "functions",
            ApiType::Events => "events",
        };
        f.write_str(key)
    }
}

/// What the "Return value" section of a function page says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnKind {
    Promise,
    NonPromise,
    /// No return value documentation was found at all.
    Undocumented,
}

impl ReturnKind {
    pub fn is_async(self) -> Option<bool> {
        match self {
            ReturnKind::Promise => Some(true),
            ReturnKind::NonPromise => Some(false),
            ReturnKind::Undocumented => None,
        }
    }

    pub fn is_void(self) -> bool {
        self == ReturnKind::Undocumented
    }
}

/// A type, property or event.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Member {
    #[serde(rename = "availableInChrome")]
    available_in_chrome: bool,
}

impl Member {
    pub fn available_in_chrome(&self) -> bool {
        self.available_in_chrome
    }

    pub(crate) fn set_available_in_chrome(&mut self, available: bool) {
        self.available_in_chrome = available;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    returns: ReturnKind,
    deprecated: bool,
    experimental: bool,
    available_in_chrome: bool,
}

impl Function {
    pub fn new(returns: ReturnKind, deprecated: bool, experimental: bool) -> Self {
        Function {
            returns,
            deprecated,
            experimental,
            available_in_chrome: false,
        }
    }

    pub fn returns(&self) -> ReturnKind {
        self.returns
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    pub fn is_experimental(&self) -> bool {
        self.experimental
    }

    pub fn available_in_chrome(&self) -> bool {
        self.available_in_chrome
    }

    pub(crate) fn set_available_in_chrome(&mut self, available: bool) {
        self.available_in_chrome = available;
    }
}

impl Serialize for Function {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Function", 5)?;
        s.serialize_field("async", &self.returns.is_async())?;
        s.serialize_field("void", &self.returns.is_void())?;
        s.serialize_field("deprecated", &self.deprecated)?;
        s.serialize_field("experimental", &self.experimental)?;
        s.serialize_field("availableInChrome", &self.available_in_chrome)?;
        s.end()
    }
}

/// Members of one API namespace. A category is `None` when the page listed nothing for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Namespace {
    #[serde(skip_serializing_if = "Option::is_none")]
    types: Option<IndexMap<String, Member>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<IndexMap<String, Member>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    functions: Option<IndexMap<String, Function>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    events: Option<IndexMap<String, Member>>,
}

fn non_empty<T>(entries: impl IntoIterator<Item = (String, T)>) -> Option<IndexMap<String, T>> {
    let map: IndexMap<_, _> = entries.into_iter().collect();
    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

impl Namespace {
    pub(crate) fn new(
        types: Vec<String>,
        properties: Vec<String>,
        functions: Vec<(String, Function)>,
        events: Vec<String>,
    ) -> Self {
        let members = |names: Vec<String>| non_empty(names.into_iter().map(|n| (n, Member::default())));
        Namespace {
            types: members(types),
            properties: members(properties),
            functions: non_empty(functions),
            events: members(events),
        }
    }

    pub fn types(&self) -> Option<&IndexMap<String, Member>> {
        self.types.as_ref()
    }

    pub fn properties(&self) -> Option<&IndexMap<String, Member>> {
        self.properties.as_ref()
    }

    pub fn functions(&self) -> Option<&IndexMap<String, Function>> {
        self.functions.as_ref()
    }

    pub fn events(&self) -> Option<&IndexMap<String, Member>> {
        self.events.as_ref()
    }

    /// Whether the page listed anything for the given category.
    pub fn has(&self, api_type: ApiType) -> bool {
        match api_type {
            ApiType::Types => self.types.is_some(),
            ApiType::Properties => self.properties.is_some(),
            ApiType::Functions => self.functions.is_some(),
            ApiType::Events => self.events.is_some(),
        }
    }

    /// Names of every member of the given category, in document order.
    pub fn names(&self, api_type: ApiType) -> Vec<&str> {
        fn keys<T>(map: &Option<IndexMap<String, T>>) -> Vec<&str> {
            map.iter().flat_map(|m| m.keys().map(String::as_str)).collect()
        }
        match api_type {
            ApiType::Types => keys(&self.types),
            ApiType::Properties => keys(&self.properties),
            ApiType::Functions => keys(&self.functions),
            ApiType::Events => keys(&self.events),
        }
    }

    /// Sets `availableInChrome` on every member of `api_type` using `available(name)`.
    pub(crate) fn mark_available(&mut self, api_type: ApiType, mut available: impl FnMut(&str) -> bool) {
        let members = match api_type {
            ApiType::Types => self.types.as_mut(),
            ApiType::Properties => self.properties.as_mut(),
            ApiType::Events => self.events.as_mut(),
            ApiType::Functions => {
                for (name, function) in self.functions.iter_mut().flatten() {
                    function.set_available_in_chrome(available(name.as_str()));
                }
                return;
            }
        };
        for (name, member) in members.into_iter().flatten() {
            member.set_available_in_chrome(available(name.as_str()));
        }
    }
}

/// Every crawled namespace keyed by name, in landing page order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ApiMap(IndexMap<String, Namespace>);

impl ApiMap {
    pub fn insert(&mut self, name: String, namespace: Namespace) {
        self.0.insert(name, namespace);
    }

    pub fn get(&self, name: &str) -> Option<&Namespace> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub async fn write_json(&self, path: impl AsRef<std::path::Path>) -> crate::Result<()> {
        tokio::fs::write(path, self.to_json()?).await?;
        Ok(())
    }
}
