// Copyright (C) 2022-present The NetGauze Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! BGP codes registered at IANA [BGP Parameters](https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml)
//! that are needed to build and inspect NOTIFICATION messages.
//!
//! The `Display` of every code is its registry description, which is what
//! the universal decoder reports back to the user.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, FromRepr, IntoStaticStr};

/// Generates the `u8` conversions for a registry enum and its `Undefined*`
/// counterpart that carries values missing from the registry.
macro_rules! u8_registry_conversions {
    ($registry:ident, $undefined:ident) => {
        impl From<$registry> for u8 {
            fn from(value: $registry) -> Self {
                value as u8
            }
        }

        impl TryFrom<u8> for $registry {
            type Error = $undefined;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match Self::from_repr(value) {
                    Some(val) => Ok(val),
                    None => Err($undefined(value)),
                }
            }
        }
    };
}

/// BGP Message types as registered in IANA [BGP Message Types](https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-1)
#[repr(u8)]
#[derive(
    Display, FromRepr, IntoStaticStr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize,
)]
pub enum BgpMessageType {
    #[strum(to_string = "OPEN")]
    Open = 1,
    #[strum(to_string = "UPDATE")]
    Update = 2,
    #[strum(to_string = "NOTIFICATION")]
    Notification = 3,
    #[strum(to_string = "KEEPALIVE")]
    KeepAlive = 4,
    /// Route Refresh message is registered in [RFC2918](https://datatracker.ietf.org/doc/html/rfc2918)
    #[strum(to_string = "ROUTE-REFRESH")]
    RouteRefresh = 5,
}

/// BGP Message type is not one of [`BgpMessageType`], the carried value is the
/// undefined code.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndefinedBgpMessageType(pub u8);

u8_registry_conversions!(BgpMessageType, UndefinedBgpMessageType);

/// BGP Error (Notification) Codes as defined by IANA [BGP Error (Notification) Codes](https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-3)
#[repr(u8)]
#[derive(
    Display, FromRepr, IntoStaticStr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize,
)]
pub enum BgpErrorNotificationCode {
    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    #[strum(to_string = "Message Header Error")]
    MessageHeaderError = 1,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    #[strum(to_string = "OPEN Message Error")]
    OpenMessageError = 2,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    #[strum(to_string = "UPDATE Message Error")]
    UpdateMessageError = 3,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    #[strum(to_string = "Hold Timer Expired")]
    HoldTimerExpired = 4,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    #[strum(to_string = "Finite State Machine Error")]
    FiniteStateMachineError = 5,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    #[strum(to_string = "Cease")]
    Cease = 6,

    /// [RFC7313](https://datatracker.ietf.org/doc/html/rfc7313)
    #[strum(to_string = "ROUTE-REFRESH Message Error")]
    RouteRefreshMessageError = 7,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndefinedBgpErrorNotificationCode(pub u8);

u8_registry_conversions!(BgpErrorNotificationCode, UndefinedBgpErrorNotificationCode);

impl BgpErrorNotificationCode {
    /// Registry description of `sub_code` under this error code, `None` when
    /// the sub-code is not registered.
    ///
    /// Hold Timer Expired has no sub-code registry, RFC4271 only defines the
    /// zero (unspecific) value for it.
    pub fn sub_code_name(&self, sub_code: u8) -> Option<&'static str> {
        match self {
            Self::MessageHeaderError => MessageHeaderErrorSubCode::try_from(sub_code)
                .ok()
                .map(Into::into),
            Self::OpenMessageError => OpenMessageErrorSubCode::try_from(sub_code)
                .ok()
                .map(Into::into),
            Self::UpdateMessageError => UpdateMessageErrorSubCode::try_from(sub_code)
                .ok()
                .map(Into::into),
            Self::HoldTimerExpired => (sub_code == 0).then_some("Unspecific"),
            Self::FiniteStateMachineError => FiniteStateMachineErrorSubCode::try_from(sub_code)
                .ok()
                .map(Into::into),
            Self::Cease => CeaseErrorSubCode::try_from(sub_code).ok().map(Into::into),
            Self::RouteRefreshMessageError => RouteRefreshMessageErrorSubCode::try_from(sub_code)
                .ok()
                .map(Into::into),
        }
    }
}

/// Message Header Error sub-codes for [`BgpErrorNotificationCode::MessageHeaderError`] as defined by IANA [Message Header Error subcodes](https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-5)
#[repr(u8)]
#[derive(
    Display, FromRepr, IntoStaticStr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize,
)]
pub enum MessageHeaderErrorSubCode {
    /// [RFC Errata 4493](https://www.rfc-editor.org/errata_search.php?eid=4493)
    #[strum(to_string = "Unspecific")]
    Unspecific = 0,
    #[strum(to_string = "Connection Not Synchronized")]
    ConnectionNotSynchronized = 1,
    #[strum(to_string = "Bad Message Length")]
    BadMessageLength = 2,
    #[strum(to_string = "Bad Message Type")]
    BadMessageType = 3,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndefinedMessageHeaderErrorSubCode(pub u8);

u8_registry_conversions!(MessageHeaderErrorSubCode, UndefinedMessageHeaderErrorSubCode);

/// OPEN Message Error sub-codes for [`BgpErrorNotificationCode::OpenMessageError`] as defined by IANA [OPEN Message Error subcodes](https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-6)
#[repr(u8)]
#[derive(
    Display, FromRepr, IntoStaticStr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize,
)]
pub enum OpenMessageErrorSubCode {
    /// [RFC Errata 4493](https://www.rfc-editor.org/errata_search.php?eid=4493)
    #[strum(to_string = "Unspecific")]
    Unspecific = 0,
    #[strum(to_string = "Unsupported Version Number")]
    UnsupportedVersionNumber = 1,
    #[strum(to_string = "Bad Peer AS")]
    BadPeerAs = 2,
    #[strum(to_string = "Bad BGP Identifier")]
    BadBgpIdentifier = 3,
    #[strum(to_string = "Unsupported Optional Parameter")]
    UnsupportedOptionalParameter = 4,
    #[strum(to_string = "Unacceptable Hold Time")]
    UnacceptableHoldTime = 6,

    /// [RFC5492](https://datatracker.ietf.org/doc/html/rfc5492)
    #[strum(to_string = "Unsupported Capability")]
    UnsupportedCapability = 7,

    /// [RFC9234](https://datatracker.ietf.org/doc/html/rfc9234)
    #[strum(to_string = "Role Mismatch")]
    RoleMismatch = 11,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndefinedOpenMessageErrorSubCode(pub u8);

u8_registry_conversions!(OpenMessageErrorSubCode, UndefinedOpenMessageErrorSubCode);

/// UPDATE Message Error sub-codes for [`BgpErrorNotificationCode::UpdateMessageError`] as defined by IANA [UPDATE Message Error subcodes](https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-7)
#[repr(u8)]
#[derive(
    Display, FromRepr, IntoStaticStr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize,
)]
pub enum UpdateMessageErrorSubCode {
    /// [RFC Errata 4493](https://www.rfc-editor.org/errata_search.php?eid=4493)
    #[strum(to_string = "Unspecific")]
    Unspecific = 0,
    #[strum(to_string = "Malformed Attribute List")]
    MalformedAttributeList = 1,
    #[strum(to_string = "Unrecognized Well-known Attribute")]
    UnrecognizedWellKnownAttribute = 2,
    #[strum(to_string = "Missing Well-known Attribute")]
    MissingWellKnownAttribute = 3,
    #[strum(to_string = "Attribute Flags Error")]
    AttributeFlagsError = 4,
    #[strum(to_string = "Attribute Length Error")]
    AttributeLengthError = 5,
    #[strum(to_string = "Invalid ORIGIN Attribute")]
    InvalidOriginAttribute = 6,
    #[strum(to_string = "Invalid NEXT_HOP Attribute")]
    InvalidNextHopAttribute = 8,
    #[strum(to_string = "Optional Attribute Error")]
    OptionalAttributeError = 9,
    #[strum(to_string = "Invalid Network Field")]
    InvalidNetworkField = 10,
    #[strum(to_string = "Malformed AS_PATH")]
    MalformedAsPath = 11,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndefinedUpdateMessageErrorSubCode(pub u8);

u8_registry_conversions!(UpdateMessageErrorSubCode, UndefinedUpdateMessageErrorSubCode);

/// BGP Finite State Machine Error sub-codes for [`BgpErrorNotificationCode::FiniteStateMachineError`] as defined by IANA [BGP Finite State Machine Error Subcodes](https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-finite-state-machine-error-subcodes)
///
/// All sub-codes are defined by [RFC6608](https://datatracker.ietf.org/doc/html/rfc6608)
#[repr(u8)]
#[derive(
    Display, FromRepr, IntoStaticStr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize,
)]
pub enum FiniteStateMachineErrorSubCode {
    #[strum(to_string = "Unspecified Error")]
    UnspecifiedError = 0,
    #[strum(to_string = "Receive Unexpected Message in OpenSent State")]
    ReceiveUnexpectedMessageInOpenSentState = 1,
    #[strum(to_string = "Receive Unexpected Message in OpenConfirm State")]
    ReceiveUnexpectedMessageInOpenConfirmState = 2,
    #[strum(to_string = "Receive Unexpected Message in Established State")]
    ReceiveUnexpectedMessageInEstablishedState = 3,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndefinedFiniteStateMachineErrorSubCode(pub u8);

u8_registry_conversions!(
    FiniteStateMachineErrorSubCode,
    UndefinedFiniteStateMachineErrorSubCode
);

/// BGP Cease NOTIFICATION message Error sub-codes for [`BgpErrorNotificationCode::Cease`] as defined by IANA [BGP Cease NOTIFICATION message subcodes](https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-8)
#[repr(u8)]
#[derive(
    Display, FromRepr, IntoStaticStr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize,
)]
pub enum CeaseErrorSubCode {
    /// [RFC4486](https://datatracker.ietf.org/doc/html/rfc4486)
    #[strum(to_string = "Maximum Number of Prefixes Reached")]
    MaximumNumberOfPrefixesReached = 1,

    /// [RFC4486](https://datatracker.ietf.org/doc/html/rfc4486) and [RFC9003](https://datatracker.ietf.org/doc/html/rfc9003)
    #[strum(to_string = "Administrative Shutdown")]
    AdministrativeShutdown = 2,

    /// [RFC4486](https://datatracker.ietf.org/doc/html/rfc4486)
    #[strum(to_string = "Peer De-configured")]
    PeerDeConfigured = 3,

    /// [RFC4486](https://datatracker.ietf.org/doc/html/rfc4486) and [RFC9003](https://datatracker.ietf.org/doc/html/rfc9003)
    #[strum(to_string = "Administrative Reset")]
    AdministrativeReset = 4,

    /// [RFC4486](https://datatracker.ietf.org/doc/html/rfc4486)
    #[strum(to_string = "Connection Rejected")]
    ConnectionRejected = 5,

    /// [RFC4486](https://datatracker.ietf.org/doc/html/rfc4486)
    #[strum(to_string = "Other Configuration Change")]
    OtherConfigurationChange = 6,

    /// [RFC4486](https://datatracker.ietf.org/doc/html/rfc4486)
    #[strum(to_string = "Connection Collision Resolution")]
    ConnectionCollisionResolution = 7,

    /// [RFC4486](https://datatracker.ietf.org/doc/html/rfc4486)
    #[strum(to_string = "Out of Resources")]
    OutOfResources = 8,

    /// [RFC8538](https://datatracker.ietf.org/doc/html/rfc8538)
    #[strum(to_string = "Hard Reset")]
    HardReset = 9,

    /// [RFC9384](https://datatracker.ietf.org/doc/html/rfc9384)
    #[strum(to_string = "BFD Down")]
    BfdDown = 10,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndefinedCeaseErrorSubCode(pub u8);

u8_registry_conversions!(CeaseErrorSubCode, UndefinedCeaseErrorSubCode);

impl CeaseErrorSubCode {
    /// Cease sub-codes that may carry an RFC9003 Shutdown Communication
    pub const SHUTDOWN_COMMUNICATION: [CeaseErrorSubCode; 2] =
        [Self::AdministrativeShutdown, Self::AdministrativeReset];

    pub const fn carries_shutdown_communication(&self) -> bool {
        matches!(self, Self::AdministrativeShutdown | Self::AdministrativeReset)
    }
}

/// BGP ROUTE-REFRESH Message Error subcodes for [`BgpErrorNotificationCode::RouteRefreshMessageError`] as defined by IANA [BGP ROUTE-REFRESH Message Error subcodes](https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#route-refresh-error-subcodes)
#[repr(u8)]
#[derive(
    Display, FromRepr, IntoStaticStr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize,
)]
pub enum RouteRefreshMessageErrorSubCode {
    /// [RFC7313](https://datatracker.ietf.org/doc/html/rfc7313)
    #[strum(to_string = "Invalid Message Length")]
    InvalidMessageLength = 1,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndefinedRouteRefreshMessageError(pub u8);

u8_registry_conversions!(
    RouteRefreshMessageErrorSubCode,
    UndefinedRouteRefreshMessageError
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bgp_message_type() {
        let undefined_code = 255;
        let notification_code = 3;
        let notification = BgpMessageType::try_from(notification_code);
        let undefined = BgpMessageType::try_from(undefined_code);
        let notification_u8: u8 = BgpMessageType::Notification.into();
        assert_eq!(notification, Ok(BgpMessageType::Notification));
        assert_eq!(notification_u8, notification_code);
        assert_eq!(undefined, Err(UndefinedBgpMessageType(undefined_code)));
    }

    #[test]
    fn test_bgp_error_notification_code() {
        let undefined_code = 0;
        let valid_code = 6;
        let ret = BgpErrorNotificationCode::try_from(valid_code);
        let undefined = BgpErrorNotificationCode::try_from(undefined_code);
        let valid_u8: u8 = BgpErrorNotificationCode::Cease.into();
        assert_eq!(ret, Ok(BgpErrorNotificationCode::Cease));
        assert_eq!(valid_u8, valid_code);
        assert_eq!(
            undefined,
            Err(UndefinedBgpErrorNotificationCode(undefined_code))
        );
        assert_eq!(
            BgpErrorNotificationCode::OpenMessageError.to_string(),
            "OPEN Message Error"
        );
    }

    #[test]
    fn test_cease_notification_message_error_sub_code() {
        let undefined_code = 255;
        let valid_code = 9;
        let ret = CeaseErrorSubCode::try_from(valid_code);
        let undefined = CeaseErrorSubCode::try_from(undefined_code);
        let valid_u8: u8 = CeaseErrorSubCode::HardReset.into();
        assert_eq!(ret, Ok(CeaseErrorSubCode::HardReset));
        assert_eq!(valid_u8, valid_code);
        assert_eq!(undefined, Err(UndefinedCeaseErrorSubCode(undefined_code)));
    }

    #[test]
    fn test_shutdown_communication_sub_codes() {
        for sub_code in CeaseErrorSubCode::SHUTDOWN_COMMUNICATION {
            assert!(sub_code.carries_shutdown_communication());
        }
        assert!(!CeaseErrorSubCode::HardReset.carries_shutdown_communication());
        assert_eq!(
            CeaseErrorSubCode::AdministrativeShutdown.to_string(),
            "Administrative Shutdown"
        );
        assert_eq!(
            CeaseErrorSubCode::AdministrativeReset.to_string(),
            "Administrative Reset"
        );
    }

    #[test]
    fn test_sub_code_names() {
        assert_eq!(
            BgpErrorNotificationCode::MessageHeaderError.sub_code_name(2),
            Some("Bad Message Length")
        );
        assert_eq!(
            BgpErrorNotificationCode::UpdateMessageError.sub_code_name(8),
            Some("Invalid NEXT_HOP Attribute")
        );
        assert_eq!(
            BgpErrorNotificationCode::UpdateMessageError.sub_code_name(7),
            None
        );
        assert_eq!(
            BgpErrorNotificationCode::HoldTimerExpired.sub_code_name(0),
            Some("Unspecific")
        );
        assert_eq!(
            BgpErrorNotificationCode::HoldTimerExpired.sub_code_name(1),
            None
        );
        assert_eq!(
            BgpErrorNotificationCode::FiniteStateMachineError.sub_code_name(3),
            Some("Receive Unexpected Message in Established State")
        );
        assert_eq!(
            BgpErrorNotificationCode::RouteRefreshMessageError.sub_code_name(1),
            Some("Invalid Message Length")
        );
    }
}
