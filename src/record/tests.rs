use super::*;
use crate::testing::{self, MockTransport, OK};

const RECORD_LIST: &str = r#"{
    "status": {"code": "1", "message": "Action completed successful", "created_at": "2015-01-18 16:53:23"},
    "domain": {
        "id": "2317346", "name": "example.com", "punycode": "example.com",
        "grade": "DP_Free", "owner": "owner@example.com", "ext_status": "",
        "ttl": 600, "min_ttl": 600, "dnspod_ns": ["f1g1ns1.dnspod.net", "f1g1ns2.dnspod.net"],
        "status": "enable"
    },
    "info": {"sub_domains": "3", "record_total": "3"},
    "records": [
        {
            "id": "16894439", "ttl": "600", "value": "1.1.1.1", "enabled": "1",
            "status": "enabled", "updated_on": "2015-01-18 16:53:23", "name": "www",
            "line": "默认", "line_id": "0", "type": "A", "weight": null,
            "monitor_status": "", "remark": "", "use_aqb": "no", "mx": "0"
        },
        {
            "id": "16894440", "ttl": "600", "value": "mail.example.com.", "enabled": "0",
            "updated_on": "2015-01-18 16:53:23", "name": "@",
            "line": "默认", "type": "MX", "weight": 5, "mx": "10"
        },
        {
            "id": "16894441", "ttl": "86400", "value": "f1g1ns1.dnspod.net.", "enabled": "1",
            "name": "@", "line": "默认", "type": "NS", "mx": "0"
        }
    ]
}"#;

const CREATED: &str = r#"{"status":{"code":"1","message":"Action completed successful","created_at":"2015-01-18 16:53:23"},
    "record":{"id":"12345","name":"@","status":"enable"}}"#;

#[test]
fn list_decodes_records() {
    let transport = MockTransport::new();
    transport.respond(RECORD_LIST);
    let client = testing::client(&transport);

    let records = client.record().list("example.com").unwrap();

    assert_eq!(records.len(), 3);
    let www = &records[0];
    assert_eq!(www.id, 16894439);
    assert_eq!(www.name, "www");
    assert_eq!(www.type_, Type::A);
    assert_eq!(www.line, DEFAULT_LINE);
    assert_eq!(www.ttl, 600);
    assert_eq!(www.weight, None);
    assert!(bool::from(www.enabled));
    assert_eq!(www.use_aqb, Some(YesNo::No));

    let mx = &records[1];
    assert_eq!(mx.type_, Type::Mx);
    assert_eq!(mx.mx, Some(10));
    assert_eq!(mx.weight, Some(5));
    assert!(!bool::from(mx.enabled));

    let request = transport.single_request();
    assert_eq!(request.url.as_str(), "https://dnsapi.cn/Record.List");
    assert_eq!(testing::keys(&request), ["domain"]);
}

#[test]
fn listing_keeps_zone_summary() {
    let transport = MockTransport::new();
    transport.respond(RECORD_LIST);
    let client = testing::client(&transport);

    let listing = client.record().listing("example.com").unwrap();

    assert_eq!(listing.domain.id, 2317346);
    assert_eq!(listing.domain.min_ttl, Some(600));
    assert_eq!(listing.domain.dnspod_ns.len(), 2);
    assert_eq!(listing.info.sub_domains, 3);
    assert_eq!(listing.info.record_total, 3);
    assert_eq!(listing.records.len(), 3);
}

#[test]
fn list_fails_on_logical_error() {
    let transport = MockTransport::new();
    transport.respond(&testing::failure("10", "No records"));
    let client = testing::client(&transport);

    let err = client.record().list("example.com").unwrap_err();

    assert!(matches!(err, ClientError::Api(_)));
    assert_eq!(err.to_string(), "No records");
}

#[test]
fn list_rejects_unknown_type() {
    let transport = MockTransport::new();
    transport.respond(
        r#"{"status":{"code":"1","message":"ok"},"domain":{"id":"1","name":"example.com"},
            "records":[{"id":"1","ttl":"600","value":"x","enabled":"1","name":"@","line":"默认","type":"SPF"}]}"#,
    );
    let client = testing::client(&transport);

    assert!(matches!(
        client.record().list("example.com"),
        Err(ClientError::Decode(_))
    ));
}

#[test]
fn create_mx_record() {
    let transport = MockTransport::new();
    transport.respond(CREATED);
    let client = testing::client(&transport);

    let id = client
        .record()
        .create(
            "example.com",
            Type::Mx,
            "mail.example.com",
            RecordOptions {
                mx: Some(10),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(id, 12345);
    let request = transport.single_request();
    assert_eq!(request.url.as_str(), "https://dnsapi.cn/Record.Create");
    assert!(
        request
            .body
            .contains("record_type=MX&mx=10&value=mail.example.com&domain=example.com")
    );
    assert_eq!(
        testing::param(&request, "record_line").as_deref(),
        Some(DEFAULT_LINE)
    );
    assert_eq!(
        testing::keys(&request),
        ["record_type", "mx", "value", "domain", "record_line"]
    );
}

#[test]
fn create_mx_without_priority_sends_nothing() {
    let transport = MockTransport::new();
    let client = testing::client(&transport);

    let err = client
        .record()
        .create(
            "example.com",
            Type::Mx,
            "mail.example.com",
            RecordOptions::default(),
        )
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Validation(ValidationError::MissingMxPriority)
    ));
    assert!(transport.requests().is_empty());
}

#[test]
fn mx_priority_range() {
    let options = |mx| RecordOptions {
        mx: Some(mx),
        ..Default::default()
    };

    assert_eq!(
        options(0).validate(Type::Mx),
        Err(ValidationError::MxPriorityOutOfRange(0))
    );
    assert_eq!(
        options(21).validate(Type::Mx),
        Err(ValidationError::MxPriorityOutOfRange(21))
    );
    assert_eq!(options(1).validate(Type::Mx), Ok(()));
    assert_eq!(options(20).validate(Type::Mx), Ok(()));
    // ignored for other types
    assert_eq!(options(0).validate(Type::A), Ok(()));
    assert_eq!(RecordOptions::default().validate(Type::Txt), Ok(()));
}

#[test]
fn create_with_every_option() {
    let transport = MockTransport::new();
    transport.respond(CREATED);
    let client = testing::client(&transport);

    client
        .record()
        .create(
            "example.com",
            Type::A,
            "203.0.113.7",
            RecordOptions {
                sub_domain: Some("www".to_string()),
                line: Some("电信".to_string()),
                disabled: Some(true),
                mx: None,
                ttl: Some(600),
                weight: Some(50),
            },
        )
        .unwrap();

    let request = transport.single_request();
    assert_eq!(
        testing::keys(&request),
        [
            "record_type",
            "value",
            "domain",
            "sub_domain",
            "record_line",
            "status",
            "ttl",
            "weight"
        ]
    );
    assert_eq!(testing::param(&request, "record_line").as_deref(), Some("电信"));
    assert_eq!(testing::param(&request, "status").as_deref(), Some("disable"));
    assert_eq!(testing::param(&request, "ttl").as_deref(), Some("600"));
}

#[test]
fn modify_sends_record_id() {
    let transport = MockTransport::new();
    transport.respond(OK);
    let client = testing::client(&transport);

    client
        .record()
        .modify(
            "example.com",
            16894439,
            Type::Cname,
            "target.example.net",
            RecordOptions {
                disabled: Some(false),
                ..Default::default()
            },
        )
        .unwrap();

    let request = transport.single_request();
    assert_eq!(request.url.as_str(), "https://dnsapi.cn/Record.Modify");
    assert_eq!(
        testing::keys(&request),
        ["record_type", "value", "domain", "record_id", "record_line", "status"]
    );
    assert_eq!(testing::param(&request, "record_id").as_deref(), Some("16894439"));
    assert_eq!(testing::param(&request, "record_type").as_deref(), Some("CNAME"));
    assert_eq!(testing::param(&request, "status").as_deref(), Some("enable"));
}

#[test]
fn modify_validates_mx() {
    let transport = MockTransport::new();
    let client = testing::client(&transport);

    let err = client
        .record()
        .modify(
            "example.com",
            1,
            Type::Mx,
            "mail.example.com",
            RecordOptions {
                mx: Some(30),
                ..Default::default()
            },
        )
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Validation(ValidationError::MxPriorityOutOfRange(30))
    ));
    assert!(transport.requests().is_empty());
}

#[test]
fn remark_can_be_cleared() {
    let transport = MockTransport::new();
    transport.respond(OK);
    let client = testing::client(&transport);

    client.record().remark("example.com", 16894439, "").unwrap();

    let request = transport.single_request();
    assert_eq!(request.url.as_str(), "https://dnsapi.cn/Record.Remark");
    assert_eq!(testing::param(&request, "remark").as_deref(), Some(""));
}

#[test]
fn remove_and_set_status() {
    let transport = MockTransport::new();
    transport.respond(OK).respond(OK);
    let client = testing::client(&transport);

    client.record().set_status("example.com", 7, false).unwrap();
    client.record().remove("example.com", 7).unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].url.as_str(), "https://dnsapi.cn/Record.Status");
    assert_eq!(
        testing::keys(&requests[0]),
        ["domain", "record_id", "status"]
    );
    assert_eq!(testing::param(&requests[0], "status").as_deref(), Some("disable"));
    assert_eq!(requests[1].url.as_str(), "https://dnsapi.cn/Record.Remove");
    assert_eq!(testing::keys(&requests[1]), ["domain", "record_id"]);
}

#[test]
fn remove_succeeds_whatever_the_creation_time() {
    let transport = MockTransport::new();
    for created_at in ["2024-03-10 02:30:00", "2024-03-31 02:30:00", "2024-11-03 01:30:00"] {
        transport.respond(&format!(
            r#"{{"status":{{"code":"1","message":"Action completed successful","created_at":"{created_at}"}}}}"#
        ));
    }
    let client = testing::client(&transport);

    for _ in 0..3 {
        client.record().remove("example.com", 7).unwrap();
    }
}

#[test]
fn info_accepts_info_field_names() {
    let transport = MockTransport::new();
    transport.respond(
        r#"{"status":{"code":"1","message":"ok"},"domain":{"id":"2317346","domain":"example.com"},
            "record":{"id":"16894439","sub_domain":"www","record_type":"AAAA","record_line":"默认",
                      "record_line_id":"0","value":"2001:db8::1","weight":null,"mx":"0","ttl":"600",
                      "enabled":"1","monitor_status":"","remark":"home",
                      "updated_on":"2015-01-18 16:53:23","domain_id":"2317346"}}"#,
    );
    let client = testing::client(&transport);

    let record = client.record().info("example.com", 16894439).unwrap();

    assert_eq!(record.name, "www");
    assert_eq!(record.type_, Type::Aaaa);
    assert_eq!(record.line_id.as_deref(), Some("0"));
    assert_eq!(record.remark.as_deref(), Some("home"));
    assert_eq!(
        record.updated_on.map(|t| t.to_string()).as_deref(),
        Some("2015-01-18 16:53:23")
    );
}

#[test]
fn dynamic_update_defaults_line() {
    let transport = MockTransport::new();
    transport.respond(OK).respond(OK);
    let client = testing::client(&transport);

    client
        .record()
        .dynamic_update("example.com", 1, DynamicUpdateOptions::default())
        .unwrap();
    client
        .record()
        .dynamic_update(
            "example.com",
            1,
            DynamicUpdateOptions {
                sub_domain: Some("home".to_string()),
                line: None,
                value: Some("203.0.113.7".to_string()),
            },
        )
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].url.as_str(), "https://dnsapi.cn/Record.Ddns");
    assert_eq!(
        testing::keys(&requests[0]),
        ["domain", "record_id", "record_line"]
    );
    assert_eq!(
        testing::param(&requests[0], "record_line").as_deref(),
        Some(DEFAULT_LINE)
    );
    assert_eq!(
        testing::param(&requests[1], "value").as_deref(),
        Some("203.0.113.7")
    );
    assert_eq!(
        testing::param(&requests[1], "sub_domain").as_deref(),
        Some("home")
    );
}

#[test]
fn type_tokens() {
    assert_eq!(Type::Cname.as_str(), "CNAME");
    assert_eq!(Type::Aaaa.as_str(), "AAAA");
    assert_eq!("SRV".parse::<Type>().unwrap(), Type::Srv);
    assert!("URL".parse::<Type>().is_err());
}
