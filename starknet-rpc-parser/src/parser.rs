use tracing::{debug, instrument};

use crate::{
    config::Config,
    error::ParseError,
    fee::{FeeOverhead, MaxFeePolicy},
    models::{
        responses::{
            CallContractResponse, EstimateFeeResponse, GetBlockResponse, GetTransactionResponse,
            SimulateTransactionResponse, SimulatedTransaction,
        },
        rpc::{
            RpcFeeEstimate, RpcGetBlockResponse, RpcSimulateTransactionResponse, RpcTransaction,
        },
    },
    num::to_big_int,
};

/// Mapping from raw node results to canonical responses
///
/// Covers the read-side calls only. Declare, deploy, invoke and receipt
/// results are handled elsewhere.
pub trait ResponseParser {
    /// Map a block-with-tx-hashes result; fields are copied as they are
    fn parse_get_block_response(&self, res: RpcGetBlockResponse) -> GetBlockResponse;

    /// Map a transaction-by-hash result
    ///
    /// Missing `calldata` and `signature` become empty lists. `sender_address`
    /// mirrors `contract_address`.
    fn parse_get_transaction_response(&self, res: RpcTransaction) -> GetTransactionResponse;

    /// Map the first element of a fee estimate result
    ///
    /// # Errors
    ///
    /// * `ParseError::EmptyFeeEstimate` - `res` has no elements
    /// * `ParseError::InvalidNumber` - A fee value is not an integer
    fn parse_fee_estimate_response(
        &self,
        res: &[RpcFeeEstimate],
    ) -> Result<EstimateFeeResponse, ParseError>;

    /// Map every element of a fee estimate result, keeping order
    fn parse_fee_estimate_original_response(
        &self,
        res: &[RpcFeeEstimate],
    ) -> Result<Vec<EstimateFeeResponse>, ParseError>;

    /// Wrap the raw return values of a call
    fn parse_call_contract_response(&self, res: Vec<String>) -> CallContractResponse;

    /// Map a simulation result, attaching a suggested max fee to each transaction
    fn parse_simulate_transaction_response(
        &self,
        res: RpcSimulateTransactionResponse,
    ) -> Result<SimulateTransactionResponse, ParseError>;
}

/// Parser for results returned by a Starknet JSON-RPC node
///
/// Holds nothing but the max fee policy, so one instance can serve any number
/// of concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct RpcResponseParser<P = FeeOverhead> {
    max_fee_policy: P,
}

impl RpcResponseParser {
    /// Creates a parser with the default 50% max fee overhead
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser using the overhead from the configuration
    pub fn from_config(config: &Config) -> Self {
        Self::with_policy(FeeOverhead::new(config.max_fee_overhead_percent))
    }
}

impl<P: MaxFeePolicy> RpcResponseParser<P> {
    /// Creates a parser with a custom max fee policy
    pub fn with_policy(max_fee_policy: P) -> Self {
        Self { max_fee_policy }
    }

    pub fn max_fee_policy(&self) -> &P {
        &self.max_fee_policy
    }
}

fn convert_fee_estimate(estimate: &RpcFeeEstimate) -> Result<EstimateFeeResponse, ParseError> {
    Ok(EstimateFeeResponse {
        overall_fee: to_big_int(&estimate.overall_fee)?,
        gas_consumed: to_big_int(&estimate.gas_consumed)?,
        gas_price: to_big_int(&estimate.gas_price)?,
    })
}

impl<P: MaxFeePolicy> ResponseParser for RpcResponseParser<P> {
    fn parse_get_block_response(&self, res: RpcGetBlockResponse) -> GetBlockResponse {
        if !res.extra.is_empty() {
            debug!(ignored = res.extra.len(), "Ignoring unknown block fields");
        }
        GetBlockResponse {
            timestamp: res.timestamp,
            block_hash: res.block_hash,
            block_number: res.block_number,
            new_root: res.new_root,
            parent_hash: res.parent_hash,
            status: res.status,
            transactions: res.transactions,
        }
    }

    fn parse_get_transaction_response(&self, res: RpcTransaction) -> GetTransactionResponse {
        GetTransactionResponse {
            calldata: res.calldata.unwrap_or_default(),
            sender_address: res.contract_address.clone(),
            contract_address: res.contract_address,
            max_fee: res.max_fee,
            nonce: res.nonce,
            signature: res.signature.unwrap_or_default(),
            transaction_hash: res.transaction_hash,
            version: res.version,
        }
    }

    #[instrument(skip_all, fields(estimates = res.len()), err)]
    fn parse_fee_estimate_response(
        &self,
        res: &[RpcFeeEstimate],
    ) -> Result<EstimateFeeResponse, ParseError> {
        let first = res.first().ok_or(ParseError::EmptyFeeEstimate)?;
        if res.len() > 1 {
            debug!("Using the first of {} fee estimates", res.len());
        }
        convert_fee_estimate(first)
    }

    #[instrument(skip_all, fields(estimates = res.len()), err)]
    fn parse_fee_estimate_original_response(
        &self,
        res: &[RpcFeeEstimate],
    ) -> Result<Vec<EstimateFeeResponse>, ParseError> {
        res.iter().map(convert_fee_estimate).collect()
    }

    fn parse_call_contract_response(&self, res: Vec<String>) -> CallContractResponse {
        CallContractResponse { result: res }
    }

    #[instrument(skip_all, fields(simulated = res.simulated_transactions.len()), err)]
    fn parse_simulate_transaction_response(
        &self,
        res: RpcSimulateTransactionResponse,
    ) -> Result<SimulateTransactionResponse, ParseError> {
        let simulated_transactions = res
            .simulated_transactions
            .into_iter()
            .map(|simulated| {
                let overall_fee = to_big_int(&simulated.fee_estimation.overall_fee)?;
                let suggested_max_fees = self.max_fee_policy.max_fee(&overall_fee);
                debug!(%overall_fee, %suggested_max_fees, "Suggested max fee");

                Ok(SimulatedTransaction {
                    transaction_trace: simulated.transaction_trace,
                    fee_estimation: simulated.fee_estimation,
                    suggested_max_fees,
                })
            })
            .collect::<Result<Vec<_>, ParseError>>()?;

        Ok(SimulateTransactionResponse {
            simulated_transactions,
        })
    }
}
