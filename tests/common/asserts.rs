use taskmanager_cors::{
    CorsDecision, Headers, PreflightRejection, PreflightRejectionReason, SimpleRejection,
};

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::SimpleAccepted { headers } => headers,
        other => panic!("expected accepted simple request, got {:?}", other),
    }
}

pub fn assert_simple_rejected(decision: CorsDecision) -> SimpleRejection {
    match decision {
        CorsDecision::SimpleRejected(rejection) => rejection,
        other => panic!("expected rejected simple request, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> (Headers, u16) {
    match decision {
        CorsDecision::PreflightAccepted { headers, status } => (headers, status),
        other => panic!("expected accepted preflight, got {:?}", other),
    }
}

pub fn assert_preflight_rejected(decision: CorsDecision) -> PreflightRejection {
    match decision {
        CorsDecision::PreflightRejected(rejection) => rejection,
        other => panic!("expected rejected preflight, got {:?}", other),
    }
}

pub fn assert_preflight_rejected_for(
    decision: CorsDecision,
    expected: PreflightRejectionReason,
) -> Headers {
    let rejection = assert_preflight_rejected(decision);
    assert_eq!(rejection.reason, expected);
    rejection.headers
}
