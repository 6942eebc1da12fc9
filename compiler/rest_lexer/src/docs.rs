//! Built-in hover documentation for methods, headers and system variables.

/// Known HTTP methods with a one-line description, in canonical order.
pub const METHODS: &[(&str, &str)] = &[
    ("GET", "Requests a representation of the target resource. Should only retrieve data."),
    ("POST", "Submits an entity to the target resource, often causing a change in state."),
    ("PUT", "Replaces all current representations of the target resource with the payload."),
    ("PATCH", "Applies partial modifications to the target resource."),
    ("DELETE", "Deletes the target resource."),
    ("HEAD", "Like GET, but the response has no body."),
    ("OPTIONS", "Describes the communication options for the target resource."),
    ("TRACE", "Performs a message loop-back test along the path to the target resource."),
    ("CONNECT", "Establishes a tunnel to the server identified by the target resource."),
];

const HEADERS: &[(&str, &str)] = &[
    ("Accept", "Media types the client is able to understand."),
    ("Accept-Charset", "Character encodings the client is able to understand."),
    ("Accept-Encoding", "Content encodings (usually compression) the client can decode."),
    ("Accept-Language", "Natural languages and locales the client prefers."),
    ("Authorization", "Credentials that authenticate the client with the server."),
    ("Cache-Control", "Directives for caching mechanisms in requests and responses."),
    ("Connection", "Whether the network connection stays open after the transaction."),
    ("Content-Encoding", "Encodings applied to the body, in the order they were applied."),
    ("Content-Length", "Size of the body in bytes."),
    ("Content-Type", "Media type of the body."),
    ("Cookie", "Cookies previously sent by the server with Set-Cookie."),
    ("Host", "Host and port number of the server the request is sent to."),
    ("If-Match", "Makes the request conditional on the resource matching an ETag."),
    ("If-Modified-Since", "Makes the request conditional on the resource having changed since a date."),
    ("If-None-Match", "Makes the request conditional on the resource not matching an ETag."),
    ("Origin", "Origin that caused the request."),
    ("Referer", "Address of the page that linked to the requested resource."),
    ("User-Agent", "Identifies the application, operating system and version of the client."),
    ("X-Request-ID", "Correlates the request across services."),
];

/// System variables with their hover text.
pub const SYSTEM_VARIABLES: &[(&str, &str)] = &[
    ("$guid", "A freshly generated RFC 4122 v4 UUID."),
    ("$randomInt", "`{{$randomInt min max}}`: a random integer in [min, max)."),
    ("$timestamp", "`{{$timestamp [offset option]}}`: UTC seconds since the Unix epoch."),
    ("$datetime", "`{{$datetime rfc1123|iso8601 [offset option]}}`: a UTC datetime string."),
    ("$localDatetime", "`{{$localDatetime rfc1123|iso8601 [offset option]}}`: a local datetime string."),
    ("$processEnv", "`{{$processEnv [%]name}}`: the value of a process environment variable."),
    ("$dotenv", "`{{$dotenv [%]name}}`: a value from the `.env` file next to the request file."),
    ("$aadToken", "An Azure Active Directory token for the signed-in user."),
];

/// Canonical spelling of a known method, case-insensitive.
pub fn canonical_method(method: &str) -> Option<&'static str> {
    METHODS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(method))
        .map(|&(name, _)| name)
}

/// Hover text for an HTTP method, case-insensitive.
pub fn method_doc(method: &str) -> Option<&'static str> {
    METHODS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(method))
        .map(|&(_, doc)| doc)
}

/// Hover text for a well-known header, case-insensitive.
pub fn header_doc(name: &str) -> Option<&'static str> {
    HEADERS
        .iter()
        .find(|(header, _)| header.eq_ignore_ascii_case(name))
        .map(|&(_, doc)| doc)
}

/// Hover text for a system variable (`$guid`), case-sensitive.
pub fn system_variable_doc(name: &str) -> Option<&'static str> {
    SYSTEM_VARIABLES
        .iter()
        .find(|(variable, _)| *variable == name)
        .map(|&(_, doc)| doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_lookup_ignores_case() {
        assert_eq!(canonical_method("get"), Some("GET"));
        assert_eq!(canonical_method("Patch"), Some("PATCH"));
        assert_eq!(canonical_method("FOO"), None);
        assert!(method_doc("delete").is_some());
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        assert!(header_doc("content-type").is_some());
        assert!(header_doc("X-Unknown").is_none());
    }

    #[test]
    fn test_system_variables_are_case_sensitive() {
        assert!(system_variable_doc("$guid").is_some());
        assert!(system_variable_doc("$GUID").is_none());
    }
}
