//! Stellar result-code classification.
//!
//! Maps Horizon problem payloads to the user-facing messages shown in
//! toasts. The strings ship in Spanish, the product's end-user language.

use serde_json::Value;

use super::DashboardError;

/// Generic fallback when nothing in the payload is usable.
pub const GENERIC_TX_ERROR: &str =
    "Error desconocido al procesar la transacción. Por favor intenta de nuevo.";

/// Message for a submission that returned no hash.
pub const NO_HASH_ERROR: &str = "La transacción no fue procesada correctamente.";

/// Known Horizon result codes and their user-facing messages.
pub const STELLAR_ERROR_MESSAGES: &[(&str, &str)] = &[
    // Transaction codes
    (
        "tx_malformed",
        "La transacción está mal formada. Por favor intenta de nuevo.",
    ),
    (
        "tx_failed",
        "La transacción falló en la red. Revisa los detalles de la operación.",
    ),
    (
        "tx_too_early",
        "La transacción es demasiado temprana. Espera un momento e intenta de nuevo.",
    ),
    ("tx_too_late", "La transacción es demasiado tardía. Intenta de nuevo."),
    ("tx_duplicate", "Esta transacción ya fue procesada."),
    ("tx_insufficient_fee", "La tarifa de la transacción es insuficiente."),
    (
        "tx_internal_error",
        "Error interno en la red. Por favor intenta más tarde.",
    ),
    // Operation codes
    ("op_no_account", "La cuenta no existe en la red."),
    ("op_no_source_account", "La cuenta de origen no existe."),
    (
        "op_bad_auth",
        "Autorización fallida. Verifica que tengas permisos para esta operación.",
    ),
    ("op_bad_seq", "El número de secuencia es incorrecto."),
    ("op_not_supported", "Esta operación no está soportada."),
    ("op_too_many_subentries", "La cuenta tiene demasiadas subentradas."),
    (
        "op_exceeded_work_limit",
        "Se excedió el límite de trabajo de la operación.",
    ),
    ("op_bad_auth_extra", "Error de autorización adicional."),
    (
        "op_inflation_dest_not_found",
        "El destino de inflación no fue encontrado.",
    ),
    // Contract codes
    (
        "op_contract_execution_failed",
        "La ejecución del contrato falló. Verifica los parámetros.",
    ),
    (
        "op_soroban_resource_limit_exceeded",
        "Se excedió el límite de recursos de Soroban.",
    ),
    ("op_invalid_contract_auth", "Autorización de contrato inválida."),
];

fn known_message(code: &str) -> Option<&'static str> {
    STELLAR_ERROR_MESSAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, message)| *message)
}

/// True when the value has the Horizon problem shape: an object whose
/// `response` field is itself an object.
pub fn is_stellar_error(error: &Value) -> bool {
    error.get("response").is_some_and(Value::is_object)
}

/// Map an arbitrary error payload to a user-facing message. Never fails.
///
/// Fallback chain, first match wins: operation result code, transaction
/// result code, `detail`, `title`, top-level `message`, generic fallback.
pub fn stellar_error_message(error: &Value) -> String {
    let data = error.get("response").and_then(|r| r.get("data"));
    let result_codes = data
        .and_then(|d| d.get("extras"))
        .and_then(|e| e.get("result_codes"));

    if let Some(codes) = result_codes {
        // Operation codes are more specific than the transaction code.
        let first_op = codes
            .get("operations")
            .and_then(Value::as_array)
            .and_then(|ops| ops.first())
            .and_then(Value::as_str);
        if let Some(op) = first_op {
            return known_message(op)
                .map(str::to_owned)
                .unwrap_or_else(|| format!("Error en la operación: {op}"));
        }

        if let Some(tx) = codes.get("transaction").and_then(Value::as_str) {
            return known_message(tx)
                .map(str::to_owned)
                .unwrap_or_else(|| format!("Error en la transacción: {tx}"));
        }
    }

    if let Some(detail) = data.and_then(|d| d.get("detail")).and_then(Value::as_str) {
        return detail.to_string();
    }
    if let Some(title) = data.and_then(|d| d.get("title")).and_then(Value::as_str) {
        return title.to_string();
    }
    if let Some(message) = error.get("message").and_then(Value::as_str) {
        return message.to_string();
    }

    GENERIC_TX_ERROR.to_string()
}

/// Bridge the crate's own error type into the classifier chain.
pub fn classify_error(error: &DashboardError) -> String {
    match error {
        DashboardError::Submission { payload } => stellar_error_message(payload),
        DashboardError::MissingTxHash => NO_HASH_ERROR.to_string(),
        DashboardError::Wallet { message } => message.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn op_error(code: &str) -> Value {
        json!({
            "response": {
                "data": {
                    "extras": { "result_codes": { "operations": [code] } }
                }
            }
        })
    }

    fn tx_error(code: &str) -> Value {
        json!({
            "response": {
                "data": {
                    "extras": { "result_codes": { "transaction": code } }
                }
            }
        })
    }

    #[test]
    fn test_every_known_code_maps_to_its_message() {
        for (code, message) in STELLAR_ERROR_MESSAGES {
            assert_eq!(stellar_error_message(&op_error(code)), *message);
            assert_eq!(stellar_error_message(&tx_error(code)), *message);
        }
    }

    #[test]
    fn test_unknown_operation_code_falls_back_with_code() {
        assert_eq!(
            stellar_error_message(&op_error("op_low_reserve")),
            "Error en la operación: op_low_reserve"
        );
    }

    #[test]
    fn test_unknown_transaction_code_falls_back_with_code() {
        assert_eq!(
            stellar_error_message(&tx_error("tx_bad_seq")),
            "Error en la transacción: tx_bad_seq"
        );
    }

    #[test]
    fn test_transaction_code_only_when_no_operations() {
        // An empty operations list must not short-circuit the chain.
        let error = json!({
            "response": {
                "data": {
                    "extras": {
                        "result_codes": { "transaction": "tx_failed", "operations": [] }
                    }
                }
            }
        });
        assert_eq!(
            stellar_error_message(&error),
            "La transacción falló en la red. Revisa los detalles de la operación."
        );
    }

    #[test]
    fn test_operation_code_wins_over_transaction_code() {
        let error = json!({
            "response": {
                "data": {
                    "extras": {
                        "result_codes": {
                            "transaction": "tx_failed",
                            "operations": ["op_bad_auth"]
                        }
                    }
                }
            }
        });
        assert_eq!(
            stellar_error_message(&error),
            "Autorización fallida. Verifica que tengas permisos para esta operación."
        );
    }

    #[test]
    fn test_detail_then_title_fallback() {
        let error = json!({
            "response": { "data": { "detail": "rate limited", "title": "Too Many Requests" } }
        });
        assert_eq!(stellar_error_message(&error), "rate limited");

        let error = json!({ "response": { "data": { "title": "Too Many Requests" } } });
        assert_eq!(stellar_error_message(&error), "Too Many Requests");
    }

    #[test]
    fn test_plain_message_object_is_not_a_stellar_error() {
        let error = json!({ "message": "connection refused" });
        assert!(!is_stellar_error(&error));
        assert_eq!(stellar_error_message(&error), "connection refused");
    }

    #[test]
    fn test_is_stellar_error_requires_object_response() {
        assert!(is_stellar_error(&json!({ "response": {} })));
        assert!(!is_stellar_error(&json!({ "response": "nope" })));
        assert!(!is_stellar_error(&json!("nope")));
        assert!(!is_stellar_error(&json!(null)));
    }

    #[test]
    fn test_generic_fallback() {
        assert_eq!(stellar_error_message(&json!({})), GENERIC_TX_ERROR);
        assert_eq!(stellar_error_message(&json!(null)), GENERIC_TX_ERROR);
    }

    #[test]
    fn test_classify_error_bridges_variants() {
        let submission = DashboardError::submission(op_error("op_bad_auth"));
        assert_eq!(
            classify_error(&submission),
            "Autorización fallida. Verifica que tengas permisos para esta operación."
        );

        let wallet = DashboardError::wallet("User declined access");
        assert_eq!(classify_error(&wallet), "User declined access");

        assert_eq!(classify_error(&DashboardError::MissingTxHash), NO_HASH_ERROR);

        let validation = DashboardError::validation("El monto excede el balance disponible.");
        assert_eq!(classify_error(&validation), "El monto excede el balance disponible.");
    }
}
