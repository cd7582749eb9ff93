//! Script operations and their execution.

use er_04_orchestrator::prelude::*;
use royalty_types::ParseError;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::fmt;

// =============================================================================
// ARGUMENT TYPES
// =============================================================================

/// Node given as hex or as a dotted name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct NodeRef(pub Node);

impl TryFrom<String> for NodeRef {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.starts_with("0x") {
            s.parse().map(NodeRef)
        } else {
            Ok(NodeRef(namehash(&s)))
        }
    }
}

/// Amount given as a JSON integer, a decimal string or a `0x` hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "AmountRepr")]
pub struct Amount(pub U256);

/// Wire forms accepted for [`Amount`].
#[derive(Deserialize)]
#[serde(untagged)]
pub enum AmountRepr {
    /// JSON integer.
    Int(u64),
    /// Decimal or `0x` hex string.
    Text(String),
}

/// Malformed amount.
#[derive(Debug)]
pub struct AmountError(String);

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid amount: {}", self.0)
    }
}

impl TryFrom<AmountRepr> for Amount {
    type Error = AmountError;

    fn try_from(repr: AmountRepr) -> Result<Self, Self::Error> {
        match repr {
            AmountRepr::Int(v) => Ok(Amount(U256::from(v))),
            AmountRepr::Text(s) => {
                let parsed = match s.strip_prefix("0x") {
                    Some(digits) => U256::from_str_radix(digits, 16).ok(),
                    None => U256::from_dec_str(&s).ok(),
                };
                parsed.map(Amount).ok_or(AmountError(s))
            }
        }
    }
}

/// Arguments of `create_config` / `create_locked_config`.
#[derive(Clone, Debug, Deserialize)]
pub struct CreateArgs {
    /// Parent node.
    pub parent: NodeRef,
    /// Child label.
    pub label: String,
    /// Owner.
    pub owner: Address,
    /// Royalty charged to the child's own children.
    pub royalty_bps: u16,
    /// Units minted to the owner.
    #[serde(default)]
    pub share_units: Option<Amount>,
    /// Split beneficiaries.
    #[serde(default)]
    pub beneficiaries: Vec<Address>,
    /// Split shares.
    #[serde(default)]
    pub shares: Vec<u16>,
}

impl From<CreateArgs> for CreateConfigRequest {
    fn from(args: CreateArgs) -> Self {
        let mut request =
            CreateConfigRequest::new(args.parent.0, args.label, args.owner, args.royalty_bps)
                .with_split(args.beneficiaries, args.shares);
        request.share_units = args.share_units.map(|a| a.0);
        request
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// One script step.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Op {
    CreateConfig(CreateArgs),
    CreateLockedConfig(CreateArgs),
    SetRoyaltyRate {
        node: NodeRef,
        rate: u16,
        #[serde(default)]
        recipient: Option<Address>,
    },
    SetupSplit {
        node: NodeRef,
        beneficiaries: Vec<Address>,
        shares: Vec<u16>,
    },
    SetupParentRoyalty {
        node: NodeRef,
        parent: NodeRef,
        recipient: Address,
    },
    Mint {
        node: NodeRef,
        holder: Address,
        amount: Amount,
    },
    LockSupply {
        node: NodeRef,
    },
    BurnFuses {
        node: NodeRef,
        fuses: u32,
    },
    Deposit {
        node: NodeRef,
        amount: Amount,
    },
    Claim {
        node: NodeRef,
        beneficiary: Address,
    },
    Pending {
        node: NodeRef,
        beneficiary: Address,
    },
    GetConfig {
        node: NodeRef,
    },
}

impl Op {
    /// Tag as written in the script.
    pub fn name(&self) -> &'static str {
        match self {
            Op::CreateConfig(_) => "create_config",
            Op::CreateLockedConfig(_) => "create_locked_config",
            Op::SetRoyaltyRate { .. } => "set_royalty_rate",
            Op::SetupSplit { .. } => "setup_split",
            Op::SetupParentRoyalty { .. } => "setup_parent_royalty",
            Op::Mint { .. } => "mint",
            Op::LockSupply { .. } => "lock_supply",
            Op::BurnFuses { .. } => "burn_fuses",
            Op::Deposit { .. } => "deposit",
            Op::Claim { .. } => "claim",
            Op::Pending { .. } => "pending",
            Op::GetConfig { .. } => "get_config",
        }
    }
}

fn distribution_json(d: &Distribution) -> Value {
    let mut credits = Map::new();
    for (addr, value) in d.all_credits() {
        credits.insert(format!("{addr:?}"), json!(value.to_string()));
    }
    Value::Object(credits)
}

/// Executes one operation. Privileged steps run as `admin`.
pub fn execute<P: PayoutSink, E: EventSink>(
    service: &RoyaltyService<P, E>,
    admin: &AdminCapability,
    op: Op,
) -> Result<Value, RoyaltyError> {
    let caller = Caller::Admin(admin);
    let value = match op {
        Op::CreateConfig(args) => json!(service.create_config(args.into())?),
        Op::CreateLockedConfig(args) => json!(service.create_locked_config(args.into())?),
        Op::SetRoyaltyRate {
            node,
            rate,
            recipient,
        } => {
            service.set_royalty_rate(caller, node.0, rate, recipient)?;
            Value::Null
        }
        Op::SetupSplit {
            node,
            beneficiaries,
            shares,
        } => {
            service.setup_split(caller, node.0, beneficiaries, shares)?;
            Value::Null
        }
        Op::SetupParentRoyalty {
            node,
            parent,
            recipient,
        } => {
            service.setup_parent_royalty(caller, node.0, parent.0, recipient)?;
            Value::Null
        }
        Op::Mint {
            node,
            holder,
            amount,
        } => json!(service.mint(caller, node.0, holder, amount.0)?.to_string()),
        Op::LockSupply { node } => json!(service.lock_supply(caller, node.0)?.to_string()),
        Op::BurnFuses { node, fuses } => json!(service.burn_fuses(caller, node.0, fuses)?),
        Op::Deposit { node, amount } => distribution_json(&service.deposit(node.0, amount.0)?),
        Op::Claim { node, beneficiary } => {
            json!(service.claim(node.0, beneficiary)?.to_string())
        }
        Op::Pending { node, beneficiary } => {
            json!(service.pending(node.0, beneficiary).to_string())
        }
        Op::GetConfig { node } => json!(service.get_config(node.0)),
    };
    Ok(value)
}

/// Runs every operation, returning one result line each. Failures do not
/// stop the script.
pub fn run_script<P: PayoutSink, E: EventSink>(
    service: &RoyaltyService<P, E>,
    admin: &AdminCapability,
    ops: Vec<Op>,
) -> Vec<Value> {
    ops.into_iter()
        .map(|op| {
            let name = op.name();
            match execute(service, admin, op) {
                Ok(value) => json!({ "op": name, "ok": value }),
                Err(err) => json!({ "op": name, "error": err.to_string(), "kind": err.kind() }),
            }
        })
        .collect()
}
